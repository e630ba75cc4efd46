//! Unit tests for the AuthStore public API.
//!
//! These tests exercise the login flag through the `AuthStoreTrait`
//! interface, using the in-memory backend.

use snaplink::storage::kv::{KeyValueStore, MemoryStore};
use snaplink::stores::auth_store::{AuthStore, AuthStoreTrait};
use snaplink::types::auth::UserInfo;

fn user(nickname: &str) -> UserInfo {
    UserInfo {
        nickname: nickname.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_starts_logged_out() {
    let auth = AuthStore::new(MemoryStore::new());
    assert!(!auth.is_logged_in());
    assert!(auth.user_info().is_none());
}

#[test]
fn test_login_roundtrip() {
    let mut auth = AuthStore::new(MemoryStore::new());

    auth.login(user("someone")).unwrap();

    assert!(auth.is_logged_in());
    let info = auth.user_info().unwrap();
    assert_eq!(info.nickname, "someone");
}

#[test]
fn test_login_replaces_previous_user() {
    let mut auth = AuthStore::new(MemoryStore::new());

    auth.login(user("first")).unwrap();
    auth.login(user("second")).unwrap();

    assert_eq!(auth.user_info().unwrap().nickname, "second");
}

#[test]
fn test_logout_clears_flag() {
    let mut auth = AuthStore::new(MemoryStore::new());

    auth.login(user("someone")).unwrap();
    auth.logout().unwrap();

    assert!(!auth.is_logged_in());
    assert!(auth.user_info().is_none());

    // Logging out while logged out is fine
    auth.logout().unwrap();
    assert!(!auth.is_logged_in());
}

#[test]
fn test_corrupt_record_reads_as_logged_out() {
    let mut kv = MemoryStore::new();
    kv.write("user_info", "{ nope").unwrap();

    let auth = AuthStore::new(kv);
    assert!(!auth.is_logged_in());
    assert!(auth.user_info().is_none());
}
