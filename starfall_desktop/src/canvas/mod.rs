mod backdrop;
mod glow_overlay;
mod paint;

pub use backdrop::Backdrop;
pub use glow_overlay::GlowOverlay;
pub use paint::{paint_layer, to_color, to_point, to_rectangle};
