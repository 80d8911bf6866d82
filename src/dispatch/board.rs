//! Event wiring between the UI and the catalog/dispatcher
//!
//! The UI layer only ever calls three things: activate an index, hover an index, leave.
//! Everything it displays (gloss line, status toast) is read back from here, which keeps
//! the GUI free of per-phrase state and lets the whole flow run without a window.

use super::dispatcher::CopyDispatcher;
use crate::catalog::{PhraseCatalog, PhraseEntry};
use crate::clipboard::ClipboardWriter;
use crate::shortcuts::{Hotkey, ShortcutMap};
use tracing::info;

/// Result of activating a phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { index: usize, text: String },
    Failed { index: usize, reason: String },
    NoSuchEntry(usize),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }
}

/// Status line with a generation so a delayed clear can't wipe a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub generation: u64,
}

pub struct PhraseBoard<C> {
    catalog: PhraseCatalog,
    dispatcher: CopyDispatcher<C>,
    shortcuts: ShortcutMap,
    shortcuts_enabled: bool,
    hovered: Option<usize>,
    status: Status,
}

impl<C: ClipboardWriter> PhraseBoard<C> {
    pub fn new(catalog: PhraseCatalog, dispatcher: CopyDispatcher<C>) -> Self {
        let shortcuts = ShortcutMap::defaults(&catalog);
        Self {
            catalog,
            dispatcher,
            shortcuts,
            shortcuts_enabled: true,
            hovered: None,
            status: Status::default(),
        }
    }

    pub fn with_shortcuts(mut self, shortcuts: ShortcutMap, enabled: bool) -> Self {
        self.shortcuts = shortcuts;
        self.shortcuts_enabled = enabled;
        self
    }

    pub fn catalog(&self) -> &PhraseCatalog {
        &self.catalog
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    pub fn set_shortcuts(&mut self, shortcuts: ShortcutMap, enabled: bool) {
        self.shortcuts = shortcuts;
        self.shortcuts_enabled = enabled;
    }

    pub fn shortcuts_enabled(&self) -> bool {
        self.shortcuts_enabled
    }

    pub fn dispatcher(&self) -> &CopyDispatcher<C> {
        &self.dispatcher
    }

    /// Copy the phrase at `index`; clipboard failures are reported, never raised.
    pub fn on_activate(&mut self, index: usize) -> CopyOutcome {
        let Some(entry) = self.catalog.get(index) else {
            return CopyOutcome::NoSuchEntry(index);
        };

        let outcome = match self.dispatcher.copy(entry) {
            Ok(()) => {
                info!("Copied phrase #{}", index);
                CopyOutcome::Copied {
                    index,
                    text: entry.display_text.clone(),
                }
            }
            Err(e) => CopyOutcome::Failed {
                index,
                reason: e.to_string(),
            },
        };

        let message = match &outcome {
            CopyOutcome::Copied { text, .. } => format!("{} copied to clipboard", text),
            _ => "Failed to copy to clipboard".to_string(),
        };
        self.set_status(message);
        outcome
    }

    pub fn on_hover_enter(&mut self, index: usize) -> &str {
        self.hovered = (index < self.catalog.len()).then_some(index);
        self.gloss_text()
    }

    pub fn on_hover_leave(&mut self) -> &str {
        self.hovered = None;
        self.dispatcher.clear()
    }

    /// Activate whichever phrase `key` is bound to, if shortcuts are on.
    pub fn on_shortcut(&mut self, key: &Hotkey) -> Option<CopyOutcome> {
        if !self.shortcuts_enabled {
            return None;
        }
        let index = self.shortcuts.lookup(key)?;
        Some(self.on_activate(index))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_entry(&self) -> Option<&PhraseEntry> {
        self.hovered.and_then(|i| self.catalog.get(i))
    }

    pub fn gloss_text(&self) -> &str {
        self.dispatcher.gloss_for(self.hovered_entry())
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Clear the status only if nothing newer has been posted since `generation`.
    pub fn clear_status_if(&mut self, generation: u64) -> bool {
        if self.status.generation == generation && !self.status.message.is_empty() {
            self.status.message.clear();
            true
        } else {
            false
        }
    }

    fn set_status(&mut self, message: String) {
        self.status.generation += 1;
        self.status.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_GLOSS;
    use crate::clipboard::{FailingClipboard, MemoryClipboard};

    fn board() -> (PhraseBoard<MemoryClipboard>, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let catalog = PhraseCatalog::new(vec![
            PhraseEntry::new("ﷺ", "salutation").with_hotkey("1"),
            PhraseEntry::new("ﷻ", "majesty").with_hotkey("2"),
        ]);
        (
            PhraseBoard::new(catalog, CopyDispatcher::new(clipboard.clone())),
            clipboard,
        )
    }

    #[test]
    fn test_activate_sets_clipboard_and_status() {
        let (mut board, clipboard) = board();
        let outcome = board.on_activate(0);

        assert!(outcome.is_copied());
        assert_eq!(clipboard.contents().as_deref(), Some("ﷺ"));
        assert_eq!(board.status().message, "ﷺ copied to clipboard");
    }

    #[test]
    fn test_activate_out_of_range() {
        let (mut board, clipboard) = board();
        assert_eq!(board.on_activate(7), CopyOutcome::NoSuchEntry(7));
        assert!(clipboard.contents().is_none());
        assert!(board.status().message.is_empty());
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let (mut board, _) = board();
        assert_eq!(board.gloss_text(), PLACEHOLDER_GLOSS);
        assert_eq!(board.on_hover_enter(1), "majesty");
        assert_eq!(board.hovered(), Some(1));
        assert_eq!(board.on_hover_leave(), PLACEHOLDER_GLOSS);
        assert_eq!(board.hovered(), None);
    }

    #[test]
    fn test_hover_out_of_range_acts_like_leave() {
        let (mut board, _) = board();
        board.on_hover_enter(0);
        assert_eq!(board.on_hover_enter(42), PLACEHOLDER_GLOSS);
        assert_eq!(board.hovered(), None);
    }

    #[test]
    fn test_failed_copy_keeps_running() {
        let catalog = PhraseCatalog::new(vec![PhraseEntry::new("ﷺ", "salutation")]);
        let mut board = PhraseBoard::new(catalog, CopyDispatcher::new(FailingClipboard::default()));

        let outcome = board.on_activate(0);
        assert!(matches!(outcome, CopyOutcome::Failed { index: 0, .. }));
        assert_eq!(board.status().message, "Failed to copy to clipboard");

        // Hover still works after a failure
        assert_eq!(board.on_hover_enter(0), "salutation");
    }

    #[test]
    fn test_shortcut_activation() {
        let (mut board, clipboard) = board();
        let outcome = board.on_shortcut(&Hotkey::parse("Alt+2").unwrap());
        assert!(outcome.is_some_and(|o| o.is_copied()));
        assert_eq!(clipboard.contents().as_deref(), Some("ﷻ"));

        assert!(board.on_shortcut(&Hotkey::parse("Alt+9").unwrap()).is_none());
    }

    #[test]
    fn test_shortcuts_disabled() {
        let (board, clipboard) = board();
        let shortcuts = board.shortcuts().clone();
        let mut board = board.with_shortcuts(shortcuts, false);

        assert!(board.on_shortcut(&Hotkey::parse("1").unwrap()).is_none());
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn test_status_clear_respects_generation() {
        let (mut board, _) = board();
        board.on_activate(0);
        let first = board.status().generation;
        board.on_activate(1);

        assert!(!board.clear_status_if(first));
        assert_eq!(board.status().message, "ﷻ copied to clipboard");

        let second = board.status().generation;
        assert!(board.clear_status_if(second));
        assert!(board.status().message.is_empty());
    }
}
