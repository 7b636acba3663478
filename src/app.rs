//! App Core for Classifieds.
//!
//! Owns the settings, the one shared bookmark store and the user session.

use std::path::PathBuf;

use tracing::info;

use crate::managers::user_session::UserSession;
use crate::platform;
use crate::services::bookmark_context::BookmarkContext;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{FileStorage, MemoryStorage, SqliteStorage, StorageBackend};
use crate::types::errors::{AppError, StorageError};
use crate::types::settings::{StorageBackendKind, StorageSettings};

/// Storage backing chosen at runtime from settings.
pub type DynBackend = Box<dyn StorageBackend + Send>;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmarks: BookmarkContext<DynBackend>,
    pub user_session: UserSession,
}

impl App {
    /// Loads settings (from `config_path` or the platform default), opens the
    /// configured backing and hydrates the bookmark store from it.
    pub fn new(config_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;

        let backend = open_backend(&settings_engine.get_settings().storage)?;
        Ok(Self::with_backend(settings_engine, backend))
    }

    /// Builds an app around an already-open backing.
    pub fn with_backend(settings_engine: SettingsEngine, backend: DynBackend) -> Self {
        let key = settings_engine.get_settings().bookmarks.storage_key.clone();
        let bookmarks = BookmarkContext::initialize(backend, &key);
        info!(count = bookmarks.len(), "app ready");

        Self {
            settings_engine,
            bookmarks,
            user_session: UserSession::new(),
        }
    }
}

/// Opens the backing described by `settings`.
pub fn open_backend(settings: &StorageSettings) -> Result<DynBackend, StorageError> {
    let path = settings
        .path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_storage_path(settings.backend));

    let backend: DynBackend = match settings.backend {
        StorageBackendKind::Memory => Box::new(MemoryStorage::new()),
        StorageBackendKind::File => Box::new(FileStorage::new(&path)),
        StorageBackendKind::Sqlite => Box::new(SqliteStorage::open(&path)?),
    };
    info!(backend = ?settings.backend, path = %path.display(), "storage opened");
    Ok(backend)
}

/// Default location of the backing inside the platform data directory.
pub fn default_storage_path(kind: StorageBackendKind) -> PathBuf {
    let file_name = match kind {
        StorageBackendKind::Sqlite => "classifieds.db",
        StorageBackendKind::File | StorageBackendKind::Memory => "local_storage.json",
    };
    platform::get_data_dir().join(file_name)
}
