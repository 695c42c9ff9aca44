use serde::{Deserialize, Serialize};

/// Linear RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue with a different opacity.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

pub const PARTICLE_BLUE: Rgba = Rgba::new(0.2, 0.6, 1.0, 0.18);
pub const PARTICLE_VIOLET: Rgba = Rgba::new(0.6, 0.0, 1.0, 0.12);
pub const PARTICLE_TEAL: Rgba = Rgba::new(0.1, 0.9, 0.8, 0.10);
pub const GLOW_BLUE: Rgba = Rgba::new(0.06, 0.4, 1.0, 0.85);

/// Default ambient particle palette.
pub fn particle_palette() -> Vec<Rgba> {
    vec![PARTICLE_BLUE, PARTICLE_VIOLET, PARTICLE_TEAL]
}
