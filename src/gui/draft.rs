//! Unsaved edits made on the settings screen

use crate::shortcuts::{Hotkey, ShortcutMap};
use crate::utils::{AppSettings, ItcError, ThemeChoice};

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub theme: ThemeChoice,
    pub shortcuts_enabled: bool,
    pub shortcuts: ShortcutMap,
    /// Phrase index waiting for its next Alt+key
    pub recording: Option<usize>,
    pub error: Option<String>,
}

impl SettingsDraft {
    pub fn new(settings: &AppSettings, shortcuts: ShortcutMap) -> Self {
        Self {
            theme: settings.theme,
            shortcuts_enabled: settings.shortcuts_enabled,
            shortcuts,
            recording: None,
            error: None,
        }
    }

    pub fn start_recording(&mut self, index: usize) {
        self.recording = Some(index);
        self.error = None;
    }

    pub fn cancel_recording(&mut self) {
        self.recording = None;
    }

    /// Bind the key to the phrase being recorded. On a conflict, recording continues and
    /// the error is shown.
    pub fn record(&mut self, key: Hotkey) -> bool {
        let Some(index) = self.recording else {
            return false;
        };
        match self.shortcuts.rebind(index, key) {
            Ok(()) => {
                self.recording = None;
                self.error = None;
                true
            }
            Err(ItcError::ShortcutConflict { .. }) => {
                self.error = Some("This key is already assigned to another phrase.".to_string());
                false
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.recording = None;
                false
            }
        }
    }

    pub fn unbind(&mut self, index: usize) {
        self.shortcuts.unbind(index);
        if self.recording == Some(index) {
            self.recording = None;
        }
    }

    pub fn apply_to(&self, settings: &mut AppSettings) {
        settings.theme = self.theme;
        settings.shortcuts_enabled = self.shortcuts_enabled;
        settings.shortcuts = self.shortcuts.to_bindings();
    }
}
