use crate::catalog::{PhraseEntry, PLACEHOLDER_GLOSS};
use crate::clipboard::ClipboardWriter;
use crate::utils::ClipboardError;
use tracing::{debug, warn};

/// Copies phrases to a clipboard and answers gloss lookups.
pub struct CopyDispatcher<C> {
    clipboard: C,
    placeholder: String,
}

impl<C: ClipboardWriter> CopyDispatcher<C> {
    pub fn new(clipboard: C) -> Self {
        Self::with_placeholder(clipboard, PLACEHOLDER_GLOSS)
    }

    pub fn with_placeholder(clipboard: C, placeholder: impl Into<String>) -> Self {
        Self {
            clipboard,
            placeholder: placeholder.into(),
        }
    }

    /// Replace the clipboard contents with the entry's phrase.
    pub fn copy(&mut self, entry: &PhraseEntry) -> Result<(), ClipboardError> {
        match self.clipboard.write_text(&entry.display_text) {
            Ok(()) => {
                debug!(backend = self.clipboard.id(), "Copied {}", entry.display_text);
                Ok(())
            }
            Err(e) => {
                warn!(backend = self.clipboard.id(), "Copy failed: {}", e);
                Err(e)
            }
        }
    }

    /// Gloss for the hovered entry, or the placeholder when nothing is hovered.
    pub fn gloss_for<'a>(&'a self, entry: Option<&'a PhraseEntry>) -> &'a str {
        match entry {
            Some(entry) => &entry.gloss_text,
            None => &self.placeholder,
        }
    }

    pub fn clear(&self) -> &str {
        &self.placeholder
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{FailingClipboard, MemoryClipboard};

    #[test]
    fn test_copy_writes_display_text() {
        let clipboard = MemoryClipboard::new();
        let mut dispatcher = CopyDispatcher::new(clipboard.clone());

        dispatcher.copy(&PhraseEntry::new("ﷻ", "majesty")).unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("ﷻ"));
    }

    #[test]
    fn test_copy_failure_is_returned() {
        let mut dispatcher = CopyDispatcher::new(FailingClipboard::default());
        let result = dispatcher.copy(&PhraseEntry::new("ﷺ", "salutation"));
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }

    #[test]
    fn test_gloss_and_placeholder() {
        let dispatcher = CopyDispatcher::with_placeholder(MemoryClipboard::new(), "hover me");
        let entry = PhraseEntry::new("ﷺ", "salutation");

        assert_eq!(dispatcher.gloss_for(Some(&entry)), "salutation");
        assert_eq!(dispatcher.gloss_for(None), "hover me");
        assert_eq!(dispatcher.clear(), "hover me");
    }
}
