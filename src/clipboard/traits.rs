use crate::utils::ClipboardError;

/// Write access to a clipboard
///
/// This trait isolates the dispatcher from the platform clipboard so the copy path can be
/// exercised headless (in-memory or always-failing backends).
pub trait ClipboardWriter {
    /// Short backend name used in log lines
    fn id(&self) -> &'static str;

    /// Replace the clipboard contents with `text`. The most recent write wins.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Box<W> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}
