//! Phrase catalog: the ordered table of copyable phrases

pub mod builtin;
pub mod models;

// Re-export for convenience
pub use builtin::PLACEHOLDER_GLOSS;
pub use models::{PhraseCatalog, PhraseEntry, PhraseKind, BASMALA};
