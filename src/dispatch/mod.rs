//! Copy dispatch and hover glosses

pub mod board;
pub mod dispatcher;

// Re-export for convenience
pub use board::{CopyOutcome, PhraseBoard, Status};
pub use dispatcher::CopyDispatcher;
