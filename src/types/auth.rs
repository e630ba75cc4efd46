use serde::{Deserialize, Serialize};

/// Logged-in user record persisted by the auth store.
///
/// The store only cares about presence (logged in) or absence (logged out);
/// the payload itself is display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
