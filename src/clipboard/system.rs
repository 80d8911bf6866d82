//! Platform clipboard backed by arboard

use super::traits::ClipboardWriter;
use crate::utils::ClipboardError;
use arboard::Clipboard;
use tracing::{debug, warn};

/// System clipboard.
///
/// The arboard handle is opened on first write and kept for the lifetime of the
/// application; on X11 the selection is owned by that handle, so dropping it would drop
/// the copied text. A failed open is retried on the next write.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.clipboard.is_none() {
            let clipboard = Clipboard::new().map_err(|e| {
                warn!("Failed to access clipboard: {}", e);
                ClipboardError::Unavailable(e.to_string())
            })?;
            debug!("Opened system clipboard");
            self.clipboard = Some(clipboard);
        }

        self.clipboard
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn id(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()));

        if result.is_err() {
            // Reopen next time; the display connection may have gone away
            self.clipboard = None;
        }
        result
    }
}

/// Copy `text` and keep ownership of the selection until another application takes it.
///
/// Used by the one-shot CLI, where the process would otherwise exit and take the X11 or
/// Wayland selection with it. Elsewhere this is a plain write.
pub fn copy_and_wait(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard
            .set()
            .wait()
            .text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
