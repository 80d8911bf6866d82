//! Platform-specific locations
//!
//! - macOS: ~/Library/Application Support/Islamic Text Copier
//! - Windows: %APPDATA%\Islamic Text Copier
//! - Linux: ~/.config/islamic-text-copier

use std::path::PathBuf;

/// Home page opened by "About This App"
pub const PROJECT_URL: &str = "https://github.com/itextc/itc-osx";

fn app_dir_name() -> &'static str {
    if cfg!(target_os = "linux") {
        "islamic-text-copier"
    } else {
        "Islamic Text Copier"
    }
}

/// Returns the configuration directory
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app_dir_name())
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app_dir_name())
    }
}

/// Returns the default settings file path
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}
