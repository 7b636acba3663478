//! Bookmark Store for Classifieds.
//!
//! Implements `BookmarkStoreTrait`: an insertion-ordered set of
//! [`BookmarkedItem`]s keyed by id, hydrated from a [`StorageBackend`] on
//! startup and fully re-serialized to it after every mutation.

use tracing::{debug, warn};

use crate::storage::StorageBackend;
use crate::types::bookmark::BookmarkedItem;
use crate::types::errors::StorageError;
use crate::types::settings::DEFAULT_BOOKMARK_KEY;

/// Trait defining bookmark store operations.
///
/// Mutations never fail from the caller's point of view: a duplicate add or
/// a remove of an unknown id is a silent no-op.
pub trait BookmarkStoreTrait {
    fn is_bookmarked(&self, id: &str) -> bool;
    fn add_bookmark(&mut self, item: BookmarkedItem);
    fn remove_bookmark(&mut self, id: &str);
    /// Removes the item if saved, adds it otherwise. Returns the new state.
    fn toggle_bookmark(&mut self, item: BookmarkedItem) -> bool;
    fn bookmarks(&self) -> &[BookmarkedItem];
    fn get(&self, id: &str) -> Option<&BookmarkedItem>;
    fn search_bookmarks(&self, query: &str) -> Vec<BookmarkedItem>;
}

/// Bookmark store backed by a persistent key-value medium.
pub struct BookmarkStore<B: StorageBackend> {
    backend: B,
    key: String,
    items: Vec<BookmarkedItem>,
    last_persist_error: Option<StorageError>,
}

impl<B: StorageBackend> BookmarkStore<B> {
    /// Hydrates a store from `backend` under the default `"bookmarkedItems"` key.
    pub fn initialize(backend: B) -> Self {
        Self::initialize_with_key(backend, DEFAULT_BOOKMARK_KEY)
    }

    /// Hydrates a store from `backend` under `key`.
    ///
    /// Absent, unreadable or malformed data all produce an empty store.
    pub fn initialize_with_key(backend: B, key: &str) -> Self {
        let items = match backend.read(key) {
            Ok(Some(raw)) => decode_bookmarks(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "failed to read bookmarks, starting empty");
                Vec::new()
            }
        };
        debug!(key, count = items.len(), "bookmark store hydrated");

        Self {
            backend,
            key: key.to_string(),
            items,
            last_persist_error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Gives the backing back, e.g. to hydrate a fresh store from it.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// The failure of the most recent implicit write, cleared by the next
    /// successful one.
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    /// Serializes the whole collection to the backing and reports the outcome.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items).map_err(|e| {
            StorageError::Serialization(format!("Failed to serialize bookmarks: {}", e))
        })?;
        self.backend.write(&self.key, &json)
    }

    /// Writes after a mutation. Failures are logged and recorded, not returned.
    fn persist(&mut self) {
        match self.flush() {
            Ok(()) => {
                self.last_persist_error = None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to persist bookmarks");
                self.last_persist_error = Some(e);
            }
        }
    }
}

impl<B: StorageBackend> BookmarkStoreTrait for BookmarkStore<B> {
    fn is_bookmarked(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    fn add_bookmark(&mut self, mut item: BookmarkedItem) {
        if self.is_bookmarked(&item.id) {
            return;
        }
        if !item.price.is_finite() {
            warn!(id = %item.id, price = item.price, "non-finite price stored as 0");
            item.price = 0.0;
        }
        debug!(id = %item.id, "adding bookmark");
        self.items.push(item);
        self.persist();
    }

    fn remove_bookmark(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return;
        }
        debug!(id, "removed bookmark");
        self.persist();
    }

    fn toggle_bookmark(&mut self, item: BookmarkedItem) -> bool {
        if self.is_bookmarked(&item.id) {
            self.remove_bookmark(&item.id);
            false
        } else {
            self.add_bookmark(item);
            true
        }
    }

    fn bookmarks(&self) -> &[BookmarkedItem] {
        &self.items
    }

    fn get(&self, id: &str) -> Option<&BookmarkedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Case-insensitive substring match over title, description, location
    /// and category. An empty query returns every bookmark.
    fn search_bookmarks(&self, query: &str) -> Vec<BookmarkedItem> {
        let query = query.trim();
        self.items
            .iter()
            .filter(|item| query.is_empty() || item.matches(query))
            .cloned()
            .collect()
    }
}

/// Decodes a persisted bookmark array.
///
/// Anything other than a JSON array yields an empty list. Elements that do
/// not decode are skipped, and a repeated id keeps its first occurrence.
pub fn decode_bookmarks(raw: &str) -> Vec<BookmarkedItem> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "stored bookmarks are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut items: Vec<BookmarkedItem> = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<BookmarkedItem>(value) {
            Ok(item) if items.iter().any(|existing| existing.id == item.id) => {
                debug!(id = %item.id, "dropping duplicate stored bookmark");
            }
            Ok(item) => items.push(item),
            Err(e) => warn!(index, error = %e, "skipping undecodable stored bookmark"),
        }
    }
    items
}
