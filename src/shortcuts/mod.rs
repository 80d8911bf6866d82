//! Alt+key shortcuts for copying phrases from the keyboard

pub mod hotkey;
pub mod map;

// Re-export for convenience
pub use hotkey::Hotkey;
pub use map::{ShortcutBinding, ShortcutMap};
