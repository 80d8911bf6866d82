//! Phrase grid button

use crate::catalog::{PhraseEntry, PhraseKind};
use crate::gui::app::Message;
use crate::gui::theme::{Palette, PhraseButtonStyle};
use iced::widget::text::Shaping;
use iced::widget::{button, column, container, mouse_area, text};
use iced::{alignment, Alignment, Element, Length};

/// Height of every grid cell
pub const CELL_HEIGHT: f32 = 92.0;

fn label_size(kind: PhraseKind) -> u16 {
    match kind {
        PhraseKind::Basmala => 40,
        PhraseKind::Symbol => 34,
        PhraseKind::Phrase => 22,
    }
}

/// One grid cell: copies on press, reports pointer enter/exit with its index.
pub fn phrase_button(
    index: usize,
    entry: &PhraseEntry,
    shortcut_hint: Option<String>,
    palette: Palette,
) -> Element<'static, Message> {
    let kind = entry.kind();

    let mut content = column![text(&entry.display_text)
        .size(label_size(kind))
        .shaping(Shaping::Advanced)
        .horizontal_alignment(alignment::Horizontal::Center)]
    .spacing(4)
    .align_items(Alignment::Center);

    if let Some(hint) = shortcut_hint {
        content = content.push(
            text(hint)
                .size(11)
                .style(iced::theme::Text::Color(palette.muted)),
        );
    }

    let cell = button(container(content).width(Length::Fill).center_x().center_y())
        .on_press(Message::PhrasePressed(index))
        .width(Length::Fill)
        .height(Length::Fixed(CELL_HEIGHT))
        .padding(8)
        .style(iced::theme::Button::Custom(Box::new(PhraseButtonStyle {
            palette,
            kind,
        })));

    mouse_area(cell)
        .on_enter(Message::PhraseHovered(index))
        .on_exit(Message::PhraseLeft)
        .into()
}
