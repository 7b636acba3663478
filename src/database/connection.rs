//! SQLite connection for the local-storage database.

use std::fs;
use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;
use tracing::debug;

use super::migrations::{self, CURRENT_SCHEMA_VERSION};
use crate::types::errors::StorageError;

/// A local-storage database, migrated to [`CURRENT_SCHEMA_VERSION`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens the database at `path`, creating missing parent directories and
    /// the file itself.
    ///
    /// Fails if the file was written by a newer schema than this build knows.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(path)?;
        // Another process may hold the write lock briefly.
        conn.busy_timeout(Duration::from_secs(2))?;
        debug!(path = %path.display(), "opened storage database");
        Self::prepare(conn)
    }

    /// Opens a throwaway database that lives as long as the value.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(conn: Connection) -> Result<Self, StorageError> {
        let found = migrations::get_schema_version(&conn);
        if found > CURRENT_SCHEMA_VERSION {
            return Err(StorageError::Database(format!(
                "Database schema v{} is newer than supported v{}",
                found, CURRENT_SCHEMA_VERSION
            )));
        }
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
