use serde::{Deserialize, Serialize};

/// Key the bookmark collection is stored under.
pub const DEFAULT_BOOKMARK_KEY: &str = "bookmarkedItems";

/// Top-level application settings container. Sections missing from the
/// config file take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub storage: StorageSettings,
    pub bookmarks: BookmarkSettings,
    pub logging: LoggingSettings,
}

/// Which persistent backing to use and where it lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackendKind,
    /// Overrides the default location under the data directory.
    pub path: Option<String>,
}

/// Available persistent backings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// Nothing survives the process.
    Memory,
    /// One JSON object file holding every key.
    #[default]
    File,
    /// A SQLite database with a key-value table.
    Sqlite,
}

/// Bookmark store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookmarkSettings {
    pub storage_key: String,
}

impl Default for BookmarkSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_BOOKMARK_KEY.to_string(),
        }
    }
}

/// Log output settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "classifieds=info".to_string(),
        }
    }
}
