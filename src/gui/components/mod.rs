//! GUI components

pub mod gloss_panel;
pub mod phrase_button;

// Re-export for convenience
pub use gloss_panel::{gloss_panel, status_toast};
pub use phrase_button::phrase_button;
