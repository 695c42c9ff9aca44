use crate::canvas::to_color;
use iced::theme::Palette;
use iced::{Color, Theme};
use starfall_core::color::Rgba;

pub const THEME_NAME: &str = "Starfall Night";

/// Colours of the night-sky launcher theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::night()
    }
}

impl PaletteColors {
    /// Deep blue-black backdrop with a cold blue accent.
    pub fn night() -> Self {
        Self {
            background: Color::from_rgb8(4, 6, 14),      // Shown until the image loads
            surface: Color::from_rgb8(12, 18, 34),       // Row fill
            border: Color::from_rgb8(40, 70, 130),       // Row outline
            text: Color::from_rgb8(235, 242, 255),
            muted: Color::from_rgb8(140, 160, 200),
            accent: Color::from_rgb8(15, 102, 255),
            success: Color::from_rgb8(100, 230, 160),
            danger: Color::from_rgb8(255, 100, 110),
        }
    }

    /// Takes the accent from the selection glow so row highlights and the
    /// glow share a hue. The accent is always opaque.
    pub fn with_glow(self, glow: Rgba) -> Self {
        Self {
            accent: to_color(glow.with_alpha(1.0)),
            ..self
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::custom(
            THEME_NAME.to_string(),
            Palette {
                background: self.background,
                text: self.text,
                primary: self.accent,
                success: self.success,
                danger: self.danger,
            },
        )
    }
}
