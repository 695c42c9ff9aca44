//! Translation from core draw commands to Iced canvas primitives.

use iced::widget::canvas::{self, Path};
use starfall_core::color::Rgba;
use starfall_core::draw::{DrawCommand, DrawLayer};
use starfall_core::geometry::{Point, Rect};

pub fn to_color(color: Rgba) -> iced::Color {
    iced::Color::from_rgba(color.r, color.g, color.b, color.a)
}

pub fn to_point(point: Point) -> iced::Point {
    iced::Point::new(point.x, point.y)
}

pub fn to_rectangle(rect: Rect) -> iced::Rectangle {
    iced::Rectangle::new(
        iced::Point::new(rect.x, rect.y),
        iced::Size::new(rect.width, rect.height),
    )
}

/// Fills every command of `layer` in order. Invisible commands are skipped.
pub fn paint_layer(frame: &mut canvas::Frame, layer: &DrawLayer) {
    for command in layer {
        match *command {
            DrawCommand::Disk {
                center,
                radius,
                color,
            } => {
                if color.a <= 0.0 || radius <= 0.0 {
                    continue;
                }
                frame.fill(&Path::circle(to_point(center), radius), to_color(color));
            }
            DrawCommand::RoundedRect {
                rect,
                radius,
                color,
            } => {
                if color.a <= 0.0 || rect.size().is_empty() {
                    continue;
                }
                let path = Path::rounded_rectangle(
                    to_point(rect.position()),
                    iced::Size::new(rect.width, rect.height),
                    radius.into(),
                );
                frame.fill(&path, to_color(color));
            }
        }
    }
}
