//! snaplink storage layer.
//!
//! Provides the [`KeyValueStore`] capability the stores persist through,
//! with interchangeable backends: an in-memory map, one-file-per-key JSON
//! storage, and an embedded SQLite database.
//!
//! # Usage
//!
//! ```no_run
//! use snaplink::storage::{JsonFileStore, KeyValueStore, SqliteStore};
//!
//! // File-backed storage under a directory
//! let mut kv = JsonFileStore::new("/tmp/snaplink");
//! kv.write("greeting", "\"hello\"").expect("write failed");
//!
//! // Or an embedded database
//! let db = SqliteStore::open("snaplink.db").expect("failed to open database");
//! ```

pub mod json_file;
pub mod kv;
pub mod sqlite;

pub use json_file::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use sqlite::SqliteStore;
