//! Settings view implementation

use crate::catalog::PhraseCatalog;
use crate::gui::app::Message;
use crate::gui::draft::SettingsDraft;
use crate::gui::theme::{GlossPanel, NavButton, Palette};
use crate::utils::ThemeChoice;
use iced::widget::text::Shaping;
use iced::widget::{button, column, container, row, scrollable, text, toggler, Column, Space};
use iced::{Alignment, Element, Length};

fn section_title(label: &str, palette: Palette) -> Element<'static, Message> {
    text(label)
        .size(16)
        .style(iced::theme::Text::Color(palette.text))
        .into()
}

fn nav_button(label: &str, active: bool, message: Message, palette: Palette) -> Element<'static, Message> {
    button(text(label).size(14))
        .on_press(message)
        .padding([8, 16])
        .style(iced::theme::Button::Custom(Box::new(NavButton {
            palette,
            active,
        })))
        .into()
}

/// Create the settings view
pub fn settings_view(
    catalog: &PhraseCatalog,
    draft: &SettingsDraft,
    palette: Palette,
) -> Element<'static, Message> {
    let header = row![
        nav_button("← Back", false, Message::SwitchToMain, palette),
        Space::with_width(Length::Fill),
        text("Settings")
            .size(24)
            .style(iced::theme::Text::Color(palette.text)),
        Space::with_width(Length::Fill),
        Space::with_width(Length::Fixed(80.0)), // Balance the back button
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let appearance_section = column![
        section_title("Appearance", palette),
        row![
            nav_button(
                ThemeChoice::Dark.as_str(),
                draft.theme == ThemeChoice::Dark,
                Message::ThemeSelected(ThemeChoice::Dark),
                palette
            ),
            nav_button(
                ThemeChoice::Light.as_str(),
                draft.theme == ThemeChoice::Light,
                Message::ThemeSelected(ThemeChoice::Light),
                palette
            ),
        ]
        .spacing(10),
    ]
    .spacing(10);

    let mut rows = Column::new().spacing(8);
    for (index, entry) in catalog.entries().iter().enumerate() {
        let is_recording = draft.recording == Some(index);
        let key_label = if is_recording {
            "Press Alt + key...".to_string()
        } else {
            draft
                .shortcuts
                .key_for(index)
                .map(|key| key.to_string())
                .unwrap_or_else(|| "Unassigned".to_string())
        };
        let on_key_press = if is_recording {
            Message::CancelRecording
        } else {
            Message::StartRecording(index)
        };

        rows = rows.push(
            row![
                text(&entry.display_text)
                    .size(20)
                    .shaping(Shaping::Advanced)
                    .width(Length::Fill),
                nav_button(&key_label, is_recording, on_key_press, palette),
                nav_button("Clear", false, Message::UnbindShortcut(index), palette),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        );
    }

    let mut shortcuts_section = column![
        section_title("Keyboard Shortcuts", palette),
        text("Click a shortcut to change it, then press Alt (Option) + your key. Esc cancels.")
            .size(13)
            .style(iced::theme::Text::Color(palette.muted)),
        toggler(
            "Enable keyboard shortcuts".to_string(),
            draft.shortcuts_enabled,
            Message::ShortcutsToggled
        )
        .width(Length::Shrink),
    ]
    .spacing(10);

    if let Some(error) = &draft.error {
        shortcuts_section = shortcuts_section.push(
            text(error)
                .size(13)
                .style(iced::theme::Text::Color(palette.danger)),
        );
    }

    let body = scrollable(
        column![
            container(appearance_section)
                .padding(16)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(GlossPanel(palette)))),
            container(column![shortcuts_section, rows].spacing(16))
                .padding(16)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(GlossPanel(palette)))),
        ]
        .spacing(16),
    )
    .height(Length::Fill);

    let footer = row![
        Space::with_width(Length::Fill),
        nav_button("Cancel", false, Message::SwitchToMain, palette),
        nav_button("Save", true, Message::SaveSettings, palette),
    ]
    .spacing(10);

    column![header, body, footer]
        .spacing(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
