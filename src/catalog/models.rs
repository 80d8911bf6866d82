use serde::{Deserialize, Serialize};

/// The Bismillah ligature, rendered larger than every other entry.
pub const BASMALA: &str = "\u{FDFD}";

/// One copyable phrase and its English gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub display_text: String,
    pub gloss_text: String,
    /// Default key pressed together with Alt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
}

impl PhraseEntry {
    pub fn new(display_text: impl Into<String>, gloss_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            gloss_text: gloss_text.into(),
            hotkey: None,
        }
    }

    pub fn with_hotkey(mut self, key: impl Into<String>) -> Self {
        self.hotkey = Some(key.into());
        self
    }

    pub fn kind(&self) -> PhraseKind {
        PhraseKind::of(&self.display_text)
    }
}

/// How a phrase is drawn on its button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    Basmala,
    /// Single-glyph ligatures such as ﷺ
    Symbol,
    Phrase,
}

impl PhraseKind {
    pub fn of(text: &str) -> Self {
        if text == BASMALA {
            PhraseKind::Basmala
        } else if text.chars().count() <= 2 {
            PhraseKind::Symbol
        } else {
            PhraseKind::Phrase
        }
    }
}

/// Ordered, read-only phrase table. Position is grid position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCatalog {
    entries: Vec<PhraseEntry>,
}

impl PhraseCatalog {
    pub fn new(entries: Vec<PhraseEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PhraseEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the first entry whose default hotkey is `key`.
    pub fn index_of_hotkey(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.hotkey.as_deref().is_some_and(|k| k.eq_ignore_ascii_case(key)))
    }
}
