//! RPC method handler for the Classifieds JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdio.
//! `handle_method` dispatches a method name and its params to the app's
//! bookmark store, user session and settings.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::managers::user_session::UserSessionTrait;
use crate::services::bookmark_tray::BookmarkTray;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::BookmarkedItem;
use crate::types::user::User;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn item_param(params: &Value) -> Result<BookmarkedItem, String> {
    serde_json::from_value(params.clone()).map_err(|e| format!("invalid bookmark: {}", e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "rpc call");
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        // ─── Bookmarks ───
        "bookmark.list" => to_json(&a.bookmarks.bookmarks()),
        "bookmark.add" => {
            let item = item_param(params)?;
            if item.id.is_empty() {
                return Err("invalid bookmark: id must not be empty".to_string());
            }
            let id = item.id.clone();
            a.bookmarks.add_bookmark(item);
            Ok(json!({"id": id, "bookmarked": true}))
        }
        "bookmark.remove" => {
            let id = str_param(params, "id")?;
            a.bookmarks.remove_bookmark(id);
            Ok(json!({"id": id, "bookmarked": false}))
        }
        "bookmark.toggle" => {
            let item = item_param(params)?;
            if item.id.is_empty() {
                return Err("invalid bookmark: id must not be empty".to_string());
            }
            let id = item.id.clone();
            let bookmarked = a.bookmarks.toggle_bookmark(item);
            Ok(json!({"id": id, "bookmarked": bookmarked}))
        }
        "bookmark.isBookmarked" => {
            let id = str_param(params, "id")?;
            Ok(json!({"id": id, "bookmarked": a.bookmarks.is_bookmarked(id)}))
        }
        "bookmark.search" => {
            let query = str_param(params, "query")?;
            to_json(&a.bookmarks.search_bookmarks(query))
        }
        "bookmark.tray" => to_json(&BookmarkTray::from_items(&a.bookmarks.bookmarks())),

        // ─── User ───
        "user.login" => {
            let name = str_param(params, "name")?;
            let email = str_param(params, "email")?;
            let mut user = User::new(name, email);
            if let Some(id) = params.get("id").and_then(|v| v.as_str()) {
                user.id = id.to_string();
            }
            user.is_admin = params.get("isAdmin").and_then(|v| v.as_bool()).unwrap_or(false);
            let result = to_json(&user)?;
            a.user_session.login(user);
            Ok(result)
        }
        "user.logout" => {
            a.user_session.logout();
            Ok(json!({"ok": true}))
        }
        "user.current" => match a.user_session.current_user() {
            Some(user) => to_json(user),
            None => Ok(Value::Null),
        },

        // ─── Settings ───
        "settings.get" => to_json(a.settings_engine.get_settings()),
        // Saved to the config file only. Storage, bookmark key and log filter
        // are read once at startup, so the running store keeps its backing
        // and key until restart.
        "settings.set" => {
            let key = str_param(params, "key")?.to_string();
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.settings_engine.set_value(&key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "restartRequired": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
