//! Key-value persistence capability and the in-memory backend.

use std::collections::HashMap;

use crate::types::errors::StorageError;

/// Capability the persistent stores are built on.
///
/// Values are opaque string blobs. Each operation is single-shot and must be
/// atomic from the caller's perspective: a failed write leaves the previous
/// value observable, never a partial one.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend, used in tests and the demo.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
