//! Property-based tests for History Store operations.
//!
//! These tests verify that arbitrary sequences of history operations always
//! preserve the store's guarantees: no duplicate identities, bounded length,
//! newest entry in front, and eviction of the least recently inserted entry.

use proptest::prelude::*;
use snaplink::storage::MemoryStore;
use snaplink::stores::history_store::{HistoryStore, HistoryStoreTrait, MAX_COUNT};
use snaplink::types::media::ParsedMedia;

/// Strategy for generating media records. Source URLs are drawn from a small
/// pool so deduplication collisions actually happen; a fraction of records
/// have no source URL at all (image sets).
fn arb_item() -> impl Strategy<Value = ParsedMedia> {
    (
        prop_oneof![
            3 => (0u32..8).prop_map(|i| format!("https://cdn.example.com/video-{}.mp4", i)),
            1 => Just(String::new()),
        ],
        "[a-zA-Z][a-zA-Z0-9 ]{1,20}",
    )
        .prop_map(|(video_url, title)| ParsedMedia {
            video_url,
            title,
            ..Default::default()
        })
}

fn distinct_item(i: usize) -> ParsedMedia {
    ParsedMedia {
        video_url: format!("https://cdn.example.com/u{}.mp4", i),
        ..Default::default()
    }
}

// For any sequence of adds: no two entries share a non-empty source URL,
// the list never exceeds the cap, and the just-added item is in front.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_sequences_keep_invariants(items in proptest::collection::vec(arb_item(), 1..60)) {
        let mut store = HistoryStore::new(MemoryStore::new());

        for item in items {
            let added_url = item.video_url.clone();
            let added_title = item.title.clone();
            store.add(item).expect("add should succeed on the in-memory backend");

            let list = store.list();

            prop_assert!(list.len() <= MAX_COUNT, "cap exceeded: {}", list.len());

            prop_assert_eq!(&list[0].video_url, &added_url, "just-added entry must be in front");
            prop_assert_eq!(&list[0].title, &added_title);

            let mut seen = std::collections::HashSet::new();
            for entry in list.iter().filter(|e| !e.video_url.is_empty()) {
                prop_assert!(
                    seen.insert(entry.video_url.clone()),
                    "duplicate source URL in history: {}",
                    entry.video_url
                );
            }
        }
    }

    // When more distinct entries are added than fit, the survivors are
    // exactly the most recently inserted ones, newest first.
    #[test]
    fn eviction_drops_least_recently_inserted(n in (MAX_COUNT + 1)..=40usize) {
        let mut store = HistoryStore::new(MemoryStore::new());

        for i in 1..=n {
            store.add(distinct_item(i)).expect("add should succeed");
        }

        let list = store.list();
        prop_assert_eq!(list.len(), MAX_COUNT);
        for (pos, entry) in list.iter().enumerate() {
            let expected = distinct_item(n - pos).video_url;
            prop_assert_eq!(&entry.video_url, &expected, "wrong entry at position {}", pos);
        }
    }

    // Removing a valid index drops exactly one entry and leaves the relative
    // order of the others untouched.
    #[test]
    fn remove_at_preserves_relative_order(
        k in 1..=MAX_COUNT,
        index_seed in 0..MAX_COUNT,
    ) {
        let mut store = HistoryStore::new(MemoryStore::new());

        for i in 1..=k {
            store.add(distinct_item(i)).expect("add should succeed");
        }

        let before = store.list();
        let index = index_seed % k;
        let after = store.remove_at(index).expect("remove_at should succeed");

        let mut expected = before;
        expected.remove(index);
        let expected_urls: Vec<&str> = expected.iter().map(|e| e.video_url.as_str()).collect();
        let after_urls: Vec<&str> = after.iter().map(|e| e.video_url.as_str()).collect();

        prop_assert_eq!(after_urls, expected_urls);
        prop_assert_eq!(store.list().len(), k - 1);
    }
}
