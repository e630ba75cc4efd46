//! SQLite-backed key-value storage.
//!
//! A single `kv` table holds one row per key. The table is created
//! idempotently on open, so the store is safe to open on every startup.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::types::errors::StorageError;

use super::kv::KeyValueStore;

/// Key-value store backed by a `rusqlite::Connection`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a database file at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn =
            Connection::open(path).map_err(|e| StorageError::Database(e.to_string()))?;
        Self::init(conn)
    }

    /// Opens an in-memory database, discarded on drop. Useful for testing.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StorageError::Database(e.to_string()))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )
        .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StorageError::Database(e.to_string()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|e| StorageError::Database(e.to_string()))
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map(|_| ())
            .map_err(|e| StorageError::Database(e.to_string()))
    }
}
