//! Gloss line and status toast

use crate::gui::app::Message;
use crate::gui::theme::{GlossPanel, Palette, StatusToast};
use iced::widget::text::Shaping;
use iced::widget::{container, text, Space};
use iced::{Element, Length};

/// Panel under the grid showing the hovered phrase's meaning
pub fn gloss_panel(gloss: &str, is_placeholder: bool, palette: Palette) -> Element<'static, Message> {
    let color = if is_placeholder {
        palette.muted
    } else {
        palette.text
    };

    container(
        text(gloss)
            .size(16)
            .shaping(Shaping::Advanced)
            .style(iced::theme::Text::Color(color)),
    )
    .width(Length::Fill)
    .padding([14, 18])
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(GlossPanel(palette))))
    .into()
}

/// Toast for the latest copy result; reserves its height when empty so the grid doesn't jump
pub fn status_toast(message: &str, failed: bool, palette: Palette) -> Element<'static, Message> {
    if message.is_empty() {
        return Space::with_height(Length::Fixed(36.0)).into();
    }

    container(text(message).size(14).shaping(Shaping::Advanced))
        .padding([8, 16])
        .style(iced::theme::Container::Custom(Box::new(StatusToast {
            palette,
            failed,
        })))
        .into()
}
