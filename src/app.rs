//! App Core for snaplink.
//!
//! Central struct holding the persistent stores, wired over a JSON-file
//! backend rooted at the platform data directory.

use std::path::Path;

use crate::platform;
use crate::storage::json_file::JsonFileStore;
use crate::stores::auth_store::AuthStore;
use crate::stores::history_store::HistoryStore;

/// Central application struct holding the persistent stores.
///
/// Each store gets its own backend instance over the same directory; they
/// persist under distinct keys and never touch each other's files.
pub struct App {
    pub history: HistoryStore<JsonFileStore>,
    pub auth: AuthStore<JsonFileStore>,
}

impl App {
    /// Creates an App persisting under the platform data directory.
    pub fn new() -> Self {
        Self::with_data_dir(platform::get_data_dir())
    }

    /// Creates an App persisting under an explicit directory. Useful for
    /// tests and the demo.
    pub fn with_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            history: HistoryStore::new(JsonFileStore::new(dir)),
            auth: AuthStore::new(JsonFileStore::new(dir)),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
