//! Property-based tests for BookmarkStore mutations.
//!
//! Covers idempotent add, add/remove as inverses, id uniqueness under any
//! sequence of adds, and membership after add and remove.

use classifieds::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use classifieds::storage::MemoryStorage;
use classifieds::types::bookmark::BookmarkedItem;
use proptest::prelude::*;
use std::collections::HashSet;

/// Small id alphabet so generated sequences collide often.
fn arb_id() -> impl Strategy<Value = String> {
    "[a-e][0-3]"
}

fn arb_item() -> impl Strategy<Value = BookmarkedItem> {
    (
        arb_id(),
        "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
        0u32..100_000,
        "[A-Za-z ]{0,12}",
        prop_oneof![Just("electronics"), Just("job"), Just("apartment"), Just("")],
    )
        .prop_map(|(id, title, cents, location, category)| BookmarkedItem {
            id,
            title,
            price: f64::from(cents) / 100.0,
            location,
            image: String::new(),
            description: String::new(),
            category: category.to_string(),
            posted_date: "just now".to_string(),
        })
}

fn fresh_store() -> BookmarkStore<MemoryStorage> {
    BookmarkStore::initialize(MemoryStorage::new())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_is_idempotent(existing in prop::collection::vec(arb_item(), 0..8), item in arb_item()) {
        let mut once = fresh_store();
        let mut twice = fresh_store();
        for e in &existing {
            once.add_bookmark(e.clone());
            twice.add_bookmark(e.clone());
        }

        once.add_bookmark(item.clone());
        twice.add_bookmark(item.clone());
        twice.add_bookmark(item);

        prop_assert_eq!(once.bookmarks(), twice.bookmarks());
    }

    #[test]
    fn remove_undoes_add_of_new_item(existing in prop::collection::vec(arb_item(), 0..8), item in arb_item()) {
        let mut store = fresh_store();
        for e in existing {
            store.add_bookmark(e);
        }
        prop_assume!(!store.is_bookmarked(&item.id));

        let before = store.bookmarks().to_vec();
        store.add_bookmark(item.clone());
        store.remove_bookmark(&item.id);

        prop_assert_eq!(store.bookmarks(), before.as_slice());
    }

    #[test]
    fn ids_stay_unique(items in prop::collection::vec(arb_item(), 0..40)) {
        let mut store = fresh_store();
        for item in &items {
            store.add_bookmark(item.clone());
        }

        let mut seen = HashSet::new();
        for b in store.bookmarks() {
            prop_assert!(seen.insert(b.id.clone()), "duplicate id {}", b.id);
        }

        // First occurrence of each id wins, in first-seen order.
        let mut expected_ids = Vec::new();
        for item in &items {
            if !expected_ids.contains(&item.id) {
                expected_ids.push(item.id.clone());
            }
        }
        let ids: Vec<String> = store.bookmarks().iter().map(|b| b.id.clone()).collect();
        prop_assert_eq!(ids, expected_ids);
    }

    #[test]
    fn membership_tracks_add_and_remove(existing in prop::collection::vec(arb_item(), 0..8), item in arb_item()) {
        let mut store = fresh_store();
        for e in existing {
            store.add_bookmark(e);
        }

        store.add_bookmark(item.clone());
        prop_assert!(store.is_bookmarked(&item.id));

        store.remove_bookmark(&item.id);
        prop_assert!(!store.is_bookmarked(&item.id));
        prop_assert!(store.get(&item.id).is_none());
    }
}
