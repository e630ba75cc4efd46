//! Unit tests for the key-value storage backends.
//!
//! Every backend must satisfy the same contract: absent reads return `None`,
//! writes replace, deletes are idempotent. The file and SQLite backends are
//! additionally checked for durability across instances.

use snaplink::storage::{JsonFileStore, KeyValueStore, MemoryStore, SqliteStore};

/// Exercises the behavior every backend must share.
fn exercise_contract<S: KeyValueStore>(mut store: S) {
    assert_eq!(store.read("missing").unwrap(), None);

    store.write("k", "v1").unwrap();
    assert_eq!(store.read("k").unwrap().as_deref(), Some("v1"));

    store.write("k", "v2").unwrap();
    assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));

    store.delete("k").unwrap();
    assert_eq!(store.read("k").unwrap(), None);

    // Deleting an absent key is not an error
    store.delete("k").unwrap();
}

#[test]
fn test_memory_store_contract() {
    exercise_contract(MemoryStore::new());
}

#[test]
fn test_json_file_store_contract() {
    let dir = tempfile::tempdir().unwrap();
    exercise_contract(JsonFileStore::new(dir.path()));
}

#[test]
fn test_sqlite_store_contract() {
    exercise_contract(SqliteStore::open_in_memory().unwrap());
}

#[test]
fn test_json_file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = JsonFileStore::new(dir.path());
        store.write("parse_history", "[1,2,3]").unwrap();
    }

    let store = JsonFileStore::new(dir.path());
    assert_eq!(store.read("parse_history").unwrap().as_deref(), Some("[1,2,3]"));
}

#[test]
fn test_json_file_store_uses_one_file_per_key() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = JsonFileStore::new(dir.path());
    store.write("parse_history", "[]").unwrap();
    store.write("user_info", "{}").unwrap();

    assert!(dir.path().join("parse_history.json").exists());
    assert!(dir.path().join("user_info.json").exists());

    store.delete("user_info").unwrap();
    assert!(!dir.path().join("user_info.json").exists());
    assert!(dir.path().join("parse_history.json").exists());
}

#[test]
fn test_json_file_store_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = JsonFileStore::new(dir.path());
    store.write("k", "value").unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["k.json".to_string()]);
}

#[test]
fn test_sqlite_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("snaplink.db");

    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.write("parse_history", "[42]").unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.read("parse_history").unwrap().as_deref(), Some("[42]"));
}

#[test]
fn test_keys_are_independent() {
    let mut store = MemoryStore::new();

    store.write("a", "1").unwrap();
    store.write("b", "2").unwrap();
    store.delete("a").unwrap();

    assert_eq!(store.read("a").unwrap(), None);
    assert_eq!(store.read("b").unwrap().as_deref(), Some("2"));
}
