//! Contract tests shared by every storage backing, plus backing-specific
//! durability checks.

use rstest::rstest;
use tempfile::TempDir;

use classifieds::storage::{FileStorage, MemoryStorage, SqliteStorage, StorageBackend};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Memory,
    File,
    Sqlite,
}

/// Opens a fresh backing; the `TempDir` must outlive it.
fn open(kind: Kind, dir: &TempDir) -> Box<dyn StorageBackend> {
    match kind {
        Kind::Memory => Box::new(MemoryStorage::new()),
        Kind::File => Box::new(FileStorage::new(dir.path().join("nested").join("storage.json"))),
        Kind::Sqlite => Box::new(SqliteStorage::open(dir.path().join("storage.db")).unwrap()),
    }
}

#[rstest]
#[case(Kind::Memory)]
#[case(Kind::File)]
#[case(Kind::Sqlite)]
fn test_missing_key_is_none(#[case] kind: Kind) {
    let dir = TempDir::new().unwrap();
    let storage = open(kind, &dir);
    assert_eq!(storage.read("bookmarkedItems").unwrap(), None);
}

#[rstest]
#[case(Kind::Memory)]
#[case(Kind::File)]
#[case(Kind::Sqlite)]
fn test_write_overwrites_whole_value(#[case] kind: Kind) {
    let dir = TempDir::new().unwrap();
    let mut storage = open(kind, &dir);

    storage.write("k", "[1,2,3]").unwrap();
    storage.write("k", "[]").unwrap();
    storage.write("other", "x").unwrap();

    assert_eq!(storage.read("k").unwrap().as_deref(), Some("[]"));
    assert_eq!(storage.read("other").unwrap().as_deref(), Some("x"));
}

#[rstest]
#[case(Kind::Memory)]
#[case(Kind::File)]
#[case(Kind::Sqlite)]
fn test_remove_is_idempotent(#[case] kind: Kind) {
    let dir = TempDir::new().unwrap();
    let mut storage = open(kind, &dir);

    storage.write("k", "v").unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.read("k").unwrap(), None);
}

#[test]
fn test_file_storage_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    FileStorage::new(&path).write("k", "v").unwrap();
    assert_eq!(FileStorage::new(&path).read("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_corrupt_file_reads_as_empty_and_is_replaced_on_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut storage = FileStorage::new(&path);
    assert_eq!(storage.read("k").unwrap(), None);

    storage.write("k", "v").unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["k"], "v");
}

#[test]
fn test_sqlite_storage_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.db");

    SqliteStorage::open(&path).unwrap().write("k", "v").unwrap();
    assert_eq!(SqliteStorage::open(&path).unwrap().read("k").unwrap().as_deref(), Some("v"));
}
