//! Islāmic Text Copier library

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod dispatch;
pub mod gui;
pub mod shortcuts;
pub mod utils;

// Re-export main types for easier use
pub use catalog::{PhraseCatalog, PhraseEntry, PhraseKind, PLACEHOLDER_GLOSS};
pub use clipboard::{ClipboardWriter, FailingClipboard, MemoryClipboard, SystemClipboard};
pub use dispatch::{CopyDispatcher, CopyOutcome, PhraseBoard};
pub use gui::{AppFlags, ItcApp, Message, View};
pub use shortcuts::{Hotkey, ShortcutBinding, ShortcutMap};
pub use utils::{AppSettings, ClipboardError, ItcError, ThemeChoice};
