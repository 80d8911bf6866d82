//! Clipboard backends

pub mod memory;
pub mod system;
pub mod traits;

// Re-export for convenience
pub use memory::{FailingClipboard, MemoryClipboard};
pub use system::{copy_and_wait, SystemClipboard};
pub use traits::ClipboardWriter;
