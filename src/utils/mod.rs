//! Utility modules for error handling and configuration

pub mod config;
pub mod error;
pub mod platform;

// Re-export for convenience
pub use config::{AppSettings, ThemeChoice};
pub use error::{ClipboardError, ItcError};
pub use platform::{config_dir, settings_path, PROJECT_URL};
