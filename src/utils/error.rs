//! Error handling for the text copier

use thiserror::Error;

/// Failure to write the platform clipboard.
///
/// Always recoverable: the dispatcher reports it and the application keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Main error type for the text copier
#[derive(Debug, Error)]
pub enum ItcError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(String),

    #[error("{key} is already assigned to phrase #{index}")]
    ShortcutConflict { key: String, index: usize },

    #[error("No phrase at index {0}")]
    EntryNotFound(usize),
}
