// Classifieds platform abstraction
// Resolves where settings and local storage live on Windows, macOS and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/classifieds` (or `$XDG_CONFIG_HOME/classifieds`)
/// - **macOS**: `~/Library/Application Support/Classifieds`
/// - **Windows**: `%APPDATA%/Classifieds`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory, home of local storage.
///
/// - **Linux**: `~/.local/share/classifieds` (or `$XDG_DATA_HOME/classifieds`)
/// - **macOS**: `~/Library/Application Support/Classifieds`
/// - **Windows**: `%APPDATA%/Classifieds`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
