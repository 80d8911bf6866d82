//! Color palettes and widget styles

use crate::catalog::PhraseKind;
use crate::utils::ThemeChoice;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Colors for one theme choice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub hover: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x1b, 0x1c, 0x27),
            surface: Color::from_rgb8(0x24, 0x26, 0x35),
            hover: Color::from_rgb8(0x39, 0x3c, 0x4f),
            border: Color::from_rgb8(0x39, 0x3c, 0x4f),
            text: Color::WHITE,
            muted: Color::from_rgb8(0x9d, 0xa3, 0xb8),
            accent: Color::from_rgb8(0x63, 0x66, 0xf1),
            danger: Color::from_rgb8(0xef, 0x44, 0x44),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(0xf5, 0xf5, 0xf7),
            surface: Color::WHITE,
            hover: Color::from_rgb8(0xe0, 0xe7, 0xff),
            border: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            text: Color::from_rgb8(0x1f, 0x29, 0x37),
            muted: Color::from_rgb8(0x6b, 0x72, 0x80),
            accent: Color::from_rgb8(0x63, 0x66, 0xf1),
            danger: Color::from_rgb8(0xef, 0x44, 0x44),
        }
    }

    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }
}

/// Built-in iced theme matching a choice, used for widgets without a custom style
pub fn iced_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
    }
}

// --- Container Styles ---

pub struct AppBackground(pub Palette);

impl container::StyleSheet for AppBackground {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(self.0.text),
            background: Some(Background::Color(self.0.background)),
            ..Default::default()
        }
    }
}

pub struct GlossPanel(pub Palette);

impl container::StyleSheet for GlossPanel {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(self.0.text),
            background: Some(Background::Color(self.0.surface)),
            border: Border {
                color: self.0.border,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

pub struct StatusToast {
    pub palette: Palette,
    pub failed: bool,
}

impl container::StyleSheet for StatusToast {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let fill = if self.failed {
            self.palette.danger
        } else {
            self.palette.accent
        };
        container::Appearance {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(fill)),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

// --- Button Styles ---

pub struct PhraseButtonStyle {
    pub palette: Palette,
    pub kind: PhraseKind,
}

impl button::StyleSheet for PhraseButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let border_color = match self.kind {
            PhraseKind::Basmala => self.palette.accent,
            _ => self.palette.border,
        };
        button::Appearance {
            background: Some(Background::Color(self.palette.surface)),
            text_color: self.palette.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow::default(),
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.palette.hover)),
            ..self.active(style)
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.palette.accent)),
            text_color: Color::WHITE,
            ..self.active(style)
        }
    }
}

/// Header and settings buttons; `active` marks the selected option
pub struct NavButton {
    pub palette: Palette,
    pub active: bool,
}

impl button::StyleSheet for NavButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let (background, text_color) = if self.active {
            (self.palette.accent, Color::WHITE)
        } else {
            (self.palette.surface, self.palette.text)
        };
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: self.palette.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        if self.active {
            return active;
        }
        button::Appearance {
            background: Some(Background::Color(self.palette.hover)),
            ..active
        }
    }
}

pub struct LinkButton(pub Palette);

impl button::StyleSheet for LinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: self.0.muted,
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: self.0.accent,
            ..self.active(style)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_matches_window_colors() {
        let palette = Palette::dark();
        assert_eq!(palette.background, Color::from_rgb8(0x1b, 0x1c, 0x27));
        assert_eq!(palette.hover, Color::from_rgb8(0x39, 0x3c, 0x4f));
        assert_eq!(palette.text, Color::WHITE);
    }

    #[test]
    fn test_palette_for_choice() {
        assert_eq!(Palette::for_choice(ThemeChoice::Light), Palette::light());
        assert_ne!(Palette::dark(), Palette::light());
    }
}
