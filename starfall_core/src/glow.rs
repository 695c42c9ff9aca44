//! Selection glow: state and the layered compositor that fakes a soft bloom
//! with stacked rounded rectangles.

use crate::color::Rgba;
use crate::config::GlowConfig;
use crate::draw::{DrawCommand, DrawLayer};
use crate::geometry::Rect;

/// The shared selection-highlight overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowState {
    rect: Rect,
    intensity: f32,
    color: Rgba,
}

impl GlowState {
    pub fn new(rect: Rect, intensity: f32, color: Rgba) -> Self {
        Self {
            rect: rect.non_negative(),
            intensity: intensity.clamp(0.0, 1.0),
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Moves and resizes the glow. Negative extents clamp to zero.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect.non_negative();
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.clamp(0.0, 1.0);
    }
}

/// Scale and opacity of one glow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowLayer {
    pub index: usize,
    pub scale: f32,
    pub alpha: f32,
}

/// Renders a [`GlowState`] into a stack of progressively larger, dimmer
/// rounded rectangles. Stateless: the output depends only on the input state.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowCompositor {
    layers: usize,
    layer_spread: f32,
    cooling_spread: f32,
    base_alpha: f32,
    corner_radius: f32,
}

impl Default for GlowCompositor {
    fn default() -> Self {
        Self::new(&GlowConfig::default())
    }
}

impl GlowCompositor {
    pub fn new(config: &GlowConfig) -> Self {
        Self {
            layers: config.layers.max(1),
            layer_spread: config.layer_spread,
            cooling_spread: config.cooling_spread,
            base_alpha: config.base_alpha,
            corner_radius: config.corner_radius,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers
    }

    /// Layer `index` at `intensity`. Layers spread further apart as the
    /// glow cools, and the whole stack dims linearly with intensity.
    pub fn layer(&self, index: usize, intensity: f32) -> GlowLayer {
        let scale = 1.0 + index as f32 * self.layer_spread + (1.0 - intensity) * self.cooling_spread;
        let alpha = self.base_alpha * (1.0 - index as f32 / self.layers as f32) * intensity;
        GlowLayer { index, scale, alpha }
    }

    /// Replaces the contents of `layer` with this frame's glow, drawn
    /// back-to-front (outermost first).
    pub fn render_into(&self, glow: &GlowState, layer: &mut DrawLayer) {
        layer.clear();
        let color = glow.color();
        for index in (0..self.layers).rev() {
            let GlowLayer { scale, alpha, .. } = self.layer(index, glow.intensity());
            layer.push(DrawCommand::RoundedRect {
                rect: glow.rect().expanded_by_scale(scale),
                radius: self.corner_radius,
                color: color.with_alpha(alpha.min(color.a)),
            });
        }
    }

    pub fn render(&self, glow: &GlowState) -> DrawLayer {
        let mut layer = DrawLayer::with_capacity(self.layers);
        self.render_into(glow, &mut layer);
        layer
    }
}
