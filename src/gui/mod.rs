//! GUI module

pub mod app;
pub mod components;
pub mod draft;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::{AppFlags, ItcApp, Message, View};
