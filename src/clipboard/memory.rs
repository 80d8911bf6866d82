//! In-process clipboards for headless runs and tests

use super::traits::ClipboardWriter;
use crate::utils::ClipboardError;
use std::sync::{Arc, Mutex};

/// Clipboard held in memory.
///
/// Clones share the same cell, so a test can hand one clone to the dispatcher and read
/// back through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|n| *n).unwrap_or(0)
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(format!("Clipboard mutex poisoned: {}", e)))?;
        *contents = Some(text.to_string());

        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}

/// Clipboard that rejects every write, as on a machine without a display server.
#[derive(Debug, Clone)]
pub struct FailingClipboard {
    reason: String,
}

impl FailingClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingClipboard {
    fn default() -> Self {
        Self::new("no display server")
    }
}

impl ClipboardWriter for FailingClipboard {
    fn id(&self) -> &'static str {
        "failing"
    }

    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}
