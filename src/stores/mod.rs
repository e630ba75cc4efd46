// snaplink persistent stores
// Stores own one key each in the storage layer: parse history and the login flag.

pub mod auth_store;
pub mod history_store;
