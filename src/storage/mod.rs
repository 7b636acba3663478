//! Persistent key-value backings.
//!
//! A backing is a synchronous, string-keyed, string-valued medium. Writes
//! replace the whole value for a key; there are no partial writes and no
//! transactions across keys.

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::types::errors::StorageError;

/// Synchronous key-value storage consumed by the bookmark store.
pub trait StorageBackend {
    /// Returns the value stored under `key`, or `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
