mod palette;

pub use palette::PaletteColors;
