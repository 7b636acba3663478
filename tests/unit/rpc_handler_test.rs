//! Unit tests for the RPC handler, covering every JSON-RPC method dispatched by `handle_method`.
//!
//! Uses the same code path as the `classifieds-rpc` binary with an in-memory
//! backing and a temp settings file.

use std::sync::Mutex;

use serde_json::json;
use tempfile::TempDir;

use classifieds::app::App;
use classifieds::rpc_handler::handle_method;
use classifieds::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use classifieds::storage::MemoryStorage;

fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = tmp.path().join("settings.json").to_string_lossy().to_string();
    let app = App::with_backend(SettingsEngine::new(Some(config)), Box::new(MemoryStorage::new()));
    (Mutex::new(app), tmp)
}

fn bike() -> serde_json::Value {
    json!({
        "id": "42",
        "title": "Mountain Bike",
        "price": 450,
        "location": "Uptown",
        "image": "bike.jpg",
        "description": "21 speeds",
        "category": "sports",
        "postedDate": "5 hours ago"
    })
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Bookmarks ───

#[test]
fn test_bookmark_add_and_list() {
    let (app, _tmp) = setup();

    let res = handle_method(&app, "bookmark.add", &bike()).unwrap();
    assert_eq!(res, json!({"id": "42", "bookmarked": true}));

    let list = handle_method(&app, "bookmark.list", &json!({})).unwrap();
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["title"], "Mountain Bike");
    assert_eq!(arr[0]["postedDate"], "5 hours ago");
}

#[test]
fn test_bookmark_add_twice_is_noop() {
    let (app, _tmp) = setup();
    handle_method(&app, "bookmark.add", &bike()).unwrap();
    handle_method(&app, "bookmark.add", &bike()).unwrap();
    let list = handle_method(&app, "bookmark.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[test]
fn test_bookmark_add_requires_id() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "bookmark.add", &json!({"title": "x"})).is_err());
    assert!(handle_method(&app, "bookmark.add", &json!({"id": "", "title": "x"})).is_err());
}

#[test]
fn test_bookmark_toggle_and_membership() {
    let (app, _tmp) = setup();

    let on = handle_method(&app, "bookmark.toggle", &bike()).unwrap();
    assert_eq!(on["bookmarked"], true);
    let check = handle_method(&app, "bookmark.isBookmarked", &json!({"id": "42"})).unwrap();
    assert_eq!(check["bookmarked"], true);

    let off = handle_method(&app, "bookmark.toggle", &bike()).unwrap();
    assert_eq!(off["bookmarked"], false);
    let check = handle_method(&app, "bookmark.isBookmarked", &json!({"id": "42"})).unwrap();
    assert_eq!(check["bookmarked"], false);
}

#[test]
fn test_bookmark_remove_missing_is_ok() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "bookmark.remove", &json!({"id": "nope"})).unwrap();
    assert_eq!(res["bookmarked"], false);
    assert!(handle_method(&app, "bookmark.remove", &json!({})).is_err());
}

#[test]
fn test_bookmark_search() {
    let (app, _tmp) = setup();
    handle_method(&app, "bookmark.add", &bike()).unwrap();
    handle_method(&app, "bookmark.add", &json!({"id": "7", "title": "Sofa"})).unwrap();

    let hits = handle_method(&app, "bookmark.search", &json!({"query": "uptown"})).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["id"], "42");
    assert!(handle_method(&app, "bookmark.search", &json!({})).is_err());
}

#[test]
fn test_bookmark_tray() {
    let (app, _tmp) = setup();
    let empty = handle_method(&app, "bookmark.tray", &json!({})).unwrap();
    assert_eq!(empty["emptyMessage"], "No items bookmarked.");
    assert_eq!(empty["entries"], json!([]));

    handle_method(&app, "bookmark.add", &bike()).unwrap();
    let tray = handle_method(&app, "bookmark.tray", &json!({})).unwrap();
    assert_eq!(tray["heading"], "Saved Items");
    assert_eq!(tray["entries"][0]["subtitle"], "Uptown \u{2022} $450");
    assert_eq!(tray["emptyMessage"], serde_json::Value::Null);
}

// ─── User ───

#[test]
fn test_user_login_current_logout() {
    let (app, _tmp) = setup();

    assert_eq!(handle_method(&app, "user.current", &json!({})).unwrap(), serde_json::Value::Null);

    let user = handle_method(
        &app,
        "user.login",
        &json!({"id": "u1", "name": "Ada", "email": "ada@example.com", "isAdmin": true}),
    )
    .unwrap();
    assert_eq!(user["id"], "u1");
    assert_eq!(user["isAdmin"], true);

    let current = handle_method(&app, "user.current", &json!({})).unwrap();
    assert_eq!(current["name"], "Ada");

    handle_method(&app, "user.logout", &json!({})).unwrap();
    assert_eq!(handle_method(&app, "user.current", &json!({})).unwrap(), serde_json::Value::Null);
}

#[test]
fn test_user_login_requires_name_and_email() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "user.login", &json!({"name": "Ada"})).is_err());
}

// ─── Settings ───

#[test]
fn test_settings_get_and_set() {
    let (app, _tmp) = setup();

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["bookmarks"]["storage_key"], "bookmarkedItems");

    handle_method(
        &app,
        "settings.set",
        &json!({"key": "logging.filter", "value": "classifieds=debug"}),
    )
    .unwrap();
    let a = app.lock().unwrap();
    assert_eq!(a.settings_engine.get_settings().logging.filter, "classifieds=debug");
}

#[test]
fn test_settings_set_storage_key_applies_on_restart() {
    let (app, _tmp) = setup();
    handle_method(&app, "bookmark.add", &bike()).unwrap();

    let res = handle_method(
        &app,
        "settings.set",
        &json!({"key": "bookmarks.storage_key", "value": "savedV2"}),
    )
    .unwrap();
    assert_eq!(res["restartRequired"], true);

    let a = app.lock().unwrap();
    assert_eq!(a.settings_engine.get_settings().bookmarks.storage_key, "savedV2");
    let live_key = a.bookmarks.with_store(|store| store.storage_key().to_string());
    assert_eq!(live_key, "bookmarkedItems");
}

#[test]
fn test_settings_set_rejects_bad_key() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "settings.set", &json!({"key": "nope.nope", "value": 1}));
    assert!(res.is_err());
    assert!(handle_method(&app, "settings.set", &json!({"key": "logging.filter"})).is_err());
}

// ─── Full wiring from a settings file ───

#[test]
fn test_app_new_uses_configured_file_backing() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("settings.json");
    let storage_path = tmp.path().join("data").join("local_storage.json");
    std::fs::write(
        &config,
        serde_json::to_string(&json!({
            "storage": {"backend": "file", "path": storage_path.to_string_lossy()},
            "bookmarks": {"storage_key": "bookmarkedItems"},
            "logging": {"filter": "classifieds=warn"}
        }))
        .unwrap(),
    )
    .unwrap();
    let config = config.to_string_lossy().to_string();

    {
        let app = Mutex::new(App::new(Some(config.clone())).unwrap());
        handle_method(&app, "bookmark.add", &bike()).unwrap();
    }
    assert!(storage_path.exists());

    let app = Mutex::new(App::new(Some(config)).unwrap());
    let check = handle_method(&app, "bookmark.isBookmarked", &json!({"id": "42"})).unwrap();
    assert_eq!(check["bookmarked"], true);
}

#[test]
fn test_app_new_with_sqlite_backing() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("settings.json");
    let db_path = tmp.path().join("db").join("classifieds.db");
    std::fs::write(
        &config,
        serde_json::to_string(&json!({
            "storage": {"backend": "sqlite", "path": db_path.to_string_lossy()},
            "bookmarks": {"storage_key": "bookmarkedItems"},
            "logging": {"filter": "classifieds=warn"}
        }))
        .unwrap(),
    )
    .unwrap();
    let config = config.to_string_lossy().to_string();

    {
        let app = Mutex::new(App::new(Some(config.clone())).unwrap());
        handle_method(&app, "bookmark.add", &bike()).unwrap();
    }

    let app = Mutex::new(App::new(Some(config)).unwrap());
    let list = handle_method(&app, "bookmark.list", &json!({})).unwrap();
    assert_eq!(list[0]["id"], "42");
}

#[test]
fn test_app_new_rejects_malformed_settings() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("settings.json");
    std::fs::write(&config, "{ broken").unwrap();
    assert!(App::new(Some(config.to_string_lossy().to_string())).is_err());
}
