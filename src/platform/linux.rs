// Classifieds platform paths for Linux
// Config: ~/.config/classifieds
// Data:   ~/.local/share/classifieds

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "classifieds";

/// `$XDG_CONFIG_HOME/classifieds`, falling back to `~/.config/classifieds`.
pub fn get_config_dir() -> PathBuf {
    resolve(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok(), &[".config"])
}

/// `$XDG_DATA_HOME/classifieds`, falling back to `~/.local/share/classifieds`.
pub fn get_data_dir() -> PathBuf {
    resolve(
        env::var("XDG_DATA_HOME").ok(),
        env::var("HOME").ok(),
        &[".local", "share"],
    )
}

fn resolve(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    match xdg.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir).join(APP_DIR),
        None => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            path.extend(fallback);
            path.join(APP_DIR)
        }
    }
}
