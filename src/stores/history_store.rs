//! Parse-history store for snaplink.
//!
//! Implements `HistoryStoreTrait` — a bounded, deduplicated, recency-ordered
//! list of parsed share-link results, persisted whole under a single key of
//! an injected [`KeyValueStore`].

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::kv::KeyValueStore;
use crate::types::errors::HistoryError;
use crate::types::media::ParsedMedia;

/// Maximum number of history entries retained. Older entries beyond the cap
/// are evicted on insert.
pub const MAX_COUNT: usize = 20;

/// Storage key the history list is persisted under by default.
pub const HISTORY_KEY: &str = "parse_history";

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn list(&self) -> Vec<ParsedMedia>;
    fn add(&mut self, item: ParsedMedia) -> Result<(), HistoryError>;
    fn remove_at(&mut self, index: usize) -> Result<Vec<ParsedMedia>, HistoryError>;
    fn clear(&mut self) -> Result<(), HistoryError>;
}

/// History store backed by an injected key-value adapter.
///
/// The list is loaded, modified, and written back as a whole on every
/// mutation. At most one mutation is in flight at a time (UI event handlers
/// run to completion), so the load-modify-store sequence is a critical
/// section by construction of the calling environment.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Creates a history store persisting under the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    /// Creates a history store persisting under a caller-chosen key, so
    /// multiple isolated instances can share one backend.
    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    fn save(&mut self, list: &[ParsedMedia]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(list)
            .map_err(|e| HistoryError::Persistence(format!("Failed to serialize history: {}", e)))?;
        self.store
            .write(&self.key, &json)
            .map_err(|e| HistoryError::Persistence(e.to_string()))
    }
}

impl<S: KeyValueStore> HistoryStoreTrait for HistoryStore<S> {
    /// Returns the full current list, most-recent-first. A missing or corrupt
    /// persisted value yields the empty list; `list` never fails.
    fn list(&self) -> Vec<ParsedMedia> {
        match self.store.read(&self.key) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Records a parse result. Any existing entry with the same non-empty
    /// `video_url` is removed first, the item is stamped with the current
    /// time and prepended, and the list is truncated to [`MAX_COUNT`].
    ///
    /// Re-adding an existing `video_url` always promotes it to the front with
    /// the new payload; it never no-ops. Entries with an empty `video_url`
    /// (image sets) are never deduplicated against each other.
    fn add(&mut self, item: ParsedMedia) -> Result<(), HistoryError> {
        let mut history = self.list();
        if !item.video_url.is_empty() {
            history.retain(|h| h.video_url != item.video_url);
        }
        let mut stamped = item;
        stamped.timestamp = Self::now_millis();
        history.insert(0, stamped);
        history.truncate(MAX_COUNT);
        self.save(&history)
    }

    /// Deletes the entry at `index`, persists, and returns the resulting
    /// list. An out-of-bounds index is a no-op returning the list unchanged.
    fn remove_at(&mut self, index: usize) -> Result<Vec<ParsedMedia>, HistoryError> {
        let mut history = self.list();
        if index < history.len() {
            history.remove(index);
            self.save(&history)?;
        }
        Ok(history)
    }

    /// Drops the persisted list entirely; subsequent `list` calls return the
    /// empty list. Clearing an already-empty history is not an error.
    fn clear(&mut self) -> Result<(), HistoryError> {
        self.store
            .delete(&self.key)
            .map_err(|e| HistoryError::Persistence(e.to_string()))
    }
}
