//! Main view: phrase grid, gloss panel, status toast

use crate::catalog::PhraseCatalog;
use crate::gui::app::Message;
use crate::gui::components::{gloss_panel, phrase_button, status_toast};
use crate::gui::theme::{LinkButton, NavButton, Palette};
use crate::shortcuts::ShortcutMap;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

/// Phrases per grid row
pub const GRID_COLUMNS: usize = 4;

/// Everything the main view reads from application state
pub struct MainViewState<'a> {
    pub catalog: &'a PhraseCatalog,
    pub shortcuts: Option<&'a ShortcutMap>,
    pub gloss: &'a str,
    pub gloss_is_placeholder: bool,
    pub status: &'a str,
    pub status_failed: bool,
}

/// Create the main view
pub fn main_view(state: MainViewState<'_>, palette: Palette) -> Element<'static, Message> {
    let header = row![
        button(text("Settings").size(14))
            .on_press(Message::SwitchToSettings)
            .padding([8, 14])
            .style(iced::theme::Button::Custom(Box::new(NavButton {
                palette,
                active: false,
            }))),
        Space::with_width(Length::Fill),
        button(text("About This App").size(14))
            .on_press(Message::OpenAbout)
            .padding([8, 14])
            .style(iced::theme::Button::Custom(Box::new(LinkButton(palette)))),
    ]
    .align_items(Alignment::Center);

    let grid: Element<'static, Message> = if state.catalog.is_empty() {
        container(
            text("No phrases available")
                .size(16)
                .style(iced::theme::Text::Color(palette.muted)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    } else {
        scrollable(phrase_grid(state.catalog, state.shortcuts, palette))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let footer = row![
        text("Made by Nāsir Ātif & Abdur-Rahman Bilal")
            .size(12)
            .style(iced::theme::Text::Color(palette.muted)),
        Space::with_width(Length::Fill),
        text(format!("Version {}", env!("CARGO_PKG_VERSION")))
            .size(12)
            .style(iced::theme::Text::Color(palette.muted)),
    ]
    .align_items(Alignment::Center);

    column![
        header,
        grid,
        gloss_panel(state.gloss, state.gloss_is_placeholder, palette),
        container(status_toast(state.status, state.status_failed, palette))
            .width(Length::Fill)
            .center_x(),
        footer,
    ]
    .spacing(16)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Catalog indices laid out row by row, `GRID_COLUMNS` per row, in catalog order.
pub fn grid_rows(len: usize) -> Vec<Vec<usize>> {
    (0..len)
        .collect::<Vec<_>>()
        .chunks(GRID_COLUMNS)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// One button per catalog entry, in catalog order, `GRID_COLUMNS` per row.
fn phrase_grid(
    catalog: &PhraseCatalog,
    shortcuts: Option<&ShortcutMap>,
    palette: Palette,
) -> Element<'static, Message> {
    let mut grid = Column::new().spacing(12);

    for indices in grid_rows(catalog.len()) {
        let mut cells = Row::new().spacing(12);
        for &index in &indices {
            let Some(entry) = catalog.get(index) else {
                continue;
            };
            let hint = shortcuts
                .and_then(|map| map.key_for(index))
                .map(|key| key.to_string());
            cells = cells.push(phrase_button(index, entry, hint, palette));
        }
        // Keep cell widths equal on a short last row
        for _ in indices.len()..GRID_COLUMNS {
            cells = cells.push(Space::with_width(Length::Fill));
        }
        grid = grid.push(cells);
    }

    grid.width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_has_no_rows() {
        assert!(grid_rows(0).is_empty());
    }

    #[test]
    fn test_full_single_row() {
        assert_eq!(grid_rows(4), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_short_last_row() {
        assert_eq!(grid_rows(5), vec![vec![0, 1, 2, 3], vec![4]]);
    }

    #[test]
    fn test_every_index_once_in_order() {
        for len in [0, 4, 5, 16] {
            let rows = grid_rows(len);
            assert!(rows.iter().all(|row| !row.is_empty() && row.len() <= GRID_COLUMNS));
            let flat: Vec<usize> = rows.into_iter().flatten().collect();
            assert_eq!(flat, (0..len).collect::<Vec<_>>());
        }
        assert_eq!(grid_rows(16).len(), 4);
    }
}
