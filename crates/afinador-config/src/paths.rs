//! Platform-specific paths for the settings file.
//!
//! - **Linux**: `~/.config/afinador/`
//! - **macOS**: `~/Library/Application Support/afinador/`
//! - **Windows**: `%APPDATA%\afinador\`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "afinador";

/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "afinador.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path (the current directory) if the platform config
/// directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default settings file path.
pub fn default_settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}
