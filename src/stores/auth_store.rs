//! Login-flag store for snaplink.
//!
//! The history page is gated behind a login; this store persists the
//! logged-in user record under a single key and answers the flag.

use crate::storage::kv::KeyValueStore;
use crate::types::auth::UserInfo;
use crate::types::errors::AuthError;

/// Storage key the user record is persisted under by default.
pub const USER_INFO_KEY: &str = "user_info";

/// Trait defining auth store operations.
pub trait AuthStoreTrait {
    fn login(&mut self, user: UserInfo) -> Result<(), AuthError>;
    fn logout(&mut self) -> Result<(), AuthError>;
    fn user_info(&self) -> Option<UserInfo>;
    fn is_logged_in(&self) -> bool;
}

/// Auth store backed by an injected key-value adapter.
pub struct AuthStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// Creates an auth store persisting under the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, USER_INFO_KEY)
    }

    /// Creates an auth store persisting under a caller-chosen key.
    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }
}

impl<S: KeyValueStore> AuthStoreTrait for AuthStore<S> {
    /// Persists the user record, replacing any previous one.
    fn login(&mut self, user: UserInfo) -> Result<(), AuthError> {
        let json = serde_json::to_string(&user)
            .map_err(|e| AuthError::Persistence(format!("Failed to serialize user: {}", e)))?;
        self.store
            .write(&self.key, &json)
            .map_err(|e| AuthError::Persistence(e.to_string()))
    }

    /// Removes the user record. Logging out while logged out is not an error.
    fn logout(&mut self) -> Result<(), AuthError> {
        self.store
            .delete(&self.key)
            .map_err(|e| AuthError::Persistence(e.to_string()))
    }

    /// Returns the persisted user record, or `None` if absent or unreadable.
    fn user_info(&self) -> Option<UserInfo> {
        match self.store.read(&self.key) {
            Ok(Some(blob)) => serde_json::from_str(&blob).ok(),
            _ => None,
        }
    }

    fn is_logged_in(&self) -> bool {
        self.user_info().is_some()
    }
}
