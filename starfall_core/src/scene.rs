//! Rendering root for the launcher screen.
//!
//! The host drives the scene from its frame callback and forwards touches;
//! afterwards it paints, in order, the background image at
//! [`LauncherScene::image_rect`], [`LauncherScene::particle_layer`], its own
//! list content, and finally [`LauncherScene::glow_layer`].

use crate::background::{BackgroundAnimator, BackgroundTransform};
use crate::catalog::{ItemBounds, ItemId, LaunchEntry};
use crate::config::{Config, GlowConfig};
use crate::constants::MAX_FRAME_DT;
use crate::draw::DrawLayer;
use crate::geometry::{Point, Rect, Size};
use crate::glow::GlowCompositor;
use crate::platform::PlatformServices;
use crate::selection::{SelectionController, TouchTarget};
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Debug)]
pub struct LauncherScene<R: Rng = StdRng> {
    background: BackgroundAnimator<R>,
    selection: SelectionController,
    compositor: GlowCompositor,
    glow_layer: DrawLayer,
    services: PlatformServices,
    hovered: Option<ItemId>,
}

impl LauncherScene<StdRng> {
    pub fn new(config: &Config, viewport: Size, services: PlatformServices) -> Self {
        Self::with_background(BackgroundAnimator::new(config, viewport), &config.glow, services)
    }
}

impl<R: Rng> LauncherScene<R> {
    pub fn with_background(
        background: BackgroundAnimator<R>,
        glow: &GlowConfig,
        services: PlatformServices,
    ) -> Self {
        let compositor = GlowCompositor::new(glow);
        Self {
            background,
            selection: SelectionController::new(glow),
            glow_layer: DrawLayer::with_capacity(compositor.layer_count()),
            compositor,
            services,
            hovered: None,
        }
    }

    /// Advances every animation by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.background.tick(dt);
        self.selection.advance(dt);
        self.render_glow();
    }

    /// Routes a touch-down to the row under `point`, if any.
    pub fn touch_down(
        &mut self,
        point: Point,
        layout: &impl ItemBounds,
        entries: &[LaunchEntry],
    ) -> Option<ItemId> {
        let item = layout.hit_test(point)?;
        let bounds = layout.bounds_of(item)?;
        let target = TouchTarget {
            item,
            bounds,
            launch: entries.get(item.0).and_then(|entry| entry.target.clone()),
        };

        if !self.selection.touch_down(point, &target, &self.services) {
            return None;
        }
        self.render_glow();
        Some(item)
    }

    /// Tracks the row under a hovering pointer and plays the hover cue each
    /// time it enters a different row.
    pub fn hover(&mut self, point: Point, layout: &impl ItemBounds) -> Option<ItemId> {
        let item = layout.hit_test(point);
        if item.is_some() && item != self.hovered {
            self.services.hover_feedback();
        }
        self.hovered = item;
        item
    }

    fn render_glow(&mut self) {
        match self.selection.glow() {
            Some(glow) => self.compositor.render_into(glow, &mut self.glow_layer),
            None => self.glow_layer.clear(),
        }
    }

    pub fn resize(&mut self, viewport: Size) {
        tracing::debug!(width = viewport.width, height = viewport.height, "scene resized");
        self.background.set_viewport(viewport);
    }

    pub fn set_parallax(&mut self, x: f32, y: f32) {
        self.background.set_parallax(x, y);
    }

    pub fn frame(&self) -> u64 {
        self.background.frame()
    }

    pub fn viewport(&self) -> Size {
        self.background.viewport()
    }

    pub fn transform(&self) -> BackgroundTransform {
        self.background.transform()
    }

    pub fn image_rect(&self) -> Rect {
        self.background.image_rect()
    }

    pub fn particle_layer(&self) -> &DrawLayer {
        self.background.particle_layer()
    }

    pub fn glow_layer(&self) -> &DrawLayer {
        &self.glow_layer
    }

    pub fn background(&self) -> &BackgroundAnimator<R> {
        &self.background
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }
}
