//! File-backed key-value storage: one `<key>.json` file per key under a
//! directory.
//!
//! Writes go through a sibling temp file followed by a rename, so a torn
//! write never leaves a half-written value behind. Keys are used verbatim as
//! file stems.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::StorageError;

use super::kv::KeyValueStore;

/// Key-value store persisting each key as a JSON file in a directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write, not here.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            StorageError::Io(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace {}: {}", path.display(), e)))
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path)
            .map_err(|e| StorageError::Io(format!("Failed to delete {}: {}", path.display(), e)))
    }
}
