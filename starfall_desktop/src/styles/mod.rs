mod container;

pub use container::{app_row_style, header_style, transparent_style};
