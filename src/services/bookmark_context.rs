//! Shared access to the single bookmark store.
//!
//! Every surface that shows or changes bookmarks (the header tray, listing
//! cards on each section page, the RPC layer) holds a clone of one
//! [`BookmarkContext`]. Clones share the same store, so a save on one page is
//! visible on every other without the surfaces knowing about each other.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::storage::StorageBackend;
use crate::types::bookmark::BookmarkedItem;
use crate::types::errors::StorageError;
use crate::types::listing::Bookmarkable;

/// Cloneable handle onto one [`BookmarkStore`].
pub struct BookmarkContext<B: StorageBackend> {
    store: Arc<Mutex<BookmarkStore<B>>>,
}

impl<B: StorageBackend> Clone for BookmarkContext<B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<B: StorageBackend> BookmarkContext<B> {
    pub fn new(store: BookmarkStore<B>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Hydrates a store from `backend` under `key` and wraps it.
    pub fn initialize(backend: B, key: &str) -> Self {
        Self::new(BookmarkStore::initialize_with_key(backend, key))
    }

    fn lock(&self) -> MutexGuard<'_, BookmarkStore<B>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.lock().is_bookmarked(id)
    }

    pub fn add_bookmark(&self, item: BookmarkedItem) {
        self.lock().add_bookmark(item);
    }

    pub fn remove_bookmark(&self, id: &str) {
        self.lock().remove_bookmark(id);
    }

    pub fn toggle_bookmark(&self, item: BookmarkedItem) -> bool {
        self.lock().toggle_bookmark(item)
    }

    /// Snapshot of the saved items in insertion order.
    pub fn bookmarks(&self) -> Vec<BookmarkedItem> {
        self.lock().bookmarks().to_vec()
    }

    pub fn search_bookmarks(&self, query: &str) -> Vec<BookmarkedItem> {
        self.lock().search_bookmarks(query)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether `listing` is currently saved; drives a card's pressed state.
    pub fn is_saved<L: Bookmarkable + ?Sized>(&self, listing: &L) -> bool {
        self.is_bookmarked(listing.bookmark_id())
    }

    /// Saves or unsaves `listing`. Returns whether it is saved afterwards.
    pub fn toggle<L: Bookmarkable + ?Sized>(&self, listing: &L) -> bool {
        let mut store = self.lock();
        if store.is_bookmarked(listing.bookmark_id()) {
            store.remove_bookmark(listing.bookmark_id());
            false
        } else {
            store.add_bookmark(listing.to_bookmark());
            true
        }
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.lock().flush()
    }

    /// Runs `f` with exclusive access to the underlying store.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut BookmarkStore<B>) -> R) -> R {
        f(&mut self.lock())
    }
}
