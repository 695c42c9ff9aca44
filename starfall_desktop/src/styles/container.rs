use crate::constants::ITEM_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent app row so the particles show through.
pub fn app_row_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.35,
            ..palette.surface
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.4,
                ..palette.border
            },
            width: 1.0,
            radius: ITEM_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Header block above the list.
pub fn header_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: None,
        text_color: Some(palette.text),
        ..Default::default()
    }
}

/// Transparent container style.
pub fn transparent_style() -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: None,
        ..Default::default()
    }
}
