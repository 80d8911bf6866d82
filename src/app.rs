//! Application initialization and main entry point

use crate::gui::{AppFlags, ItcApp};
use anyhow::Result;
use iced::{Application, Settings, Size};

/// Open the window and run the event loop until it is closed
pub fn run(flags: AppFlags) -> Result<()> {
    let mut settings = Settings::with_flags(flags);
    settings.window = iced::window::Settings {
        size: Size::new(1000.0, 640.0),
        min_size: Some(Size::new(720.0, 520.0)),
        ..Default::default()
    };
    settings.antialiasing = true;

    ItcApp::run(settings)?;

    Ok(())
}
