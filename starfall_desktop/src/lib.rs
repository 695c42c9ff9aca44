//! Starfall Desktop - the launcher screen rendered with Iced.

pub mod canvas;
pub mod constants;
pub mod layout;
pub mod logging;
pub mod platform;
pub mod styles;
pub mod theme;

pub use constants::*;
pub use layout::ListGeometry;
pub use platform::{desktop_services, OpenLauncher, RodioAudio};
pub use styles::*;
pub use theme::PaletteColors;
