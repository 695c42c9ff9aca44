//! Touch-driven selection highlight.
//!
//! Two states: `Idle` before the first touch, `Active` forever after. The
//! controller owns the one and only [`GlowState`]; later touches move it and
//! restart its intensity curve instead of creating another.

use crate::animation::SegmentedTween;
use crate::catalog::ItemId;
use crate::config::GlowConfig;
use crate::geometry::{Point, Rect};
use crate::glow::GlowState;
use crate::platform::{LaunchTarget, PlatformServices};

/// A touched row, resolved by the host layout into window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchTarget {
    pub item: ItemId,
    pub bounds: Rect,
    pub launch: Option<LaunchTarget>,
}

#[derive(Debug, Clone, PartialEq)]
enum Selection {
    Idle,
    Active {
        item: ItemId,
        glow: GlowState,
        intensity: SegmentedTween,
    },
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    config: GlowConfig,
    selection: Selection,
}

impl SelectionController {
    pub fn new(config: &GlowConfig) -> Self {
        Self {
            config: config.clone(),
            selection: Selection::Idle,
        }
    }

    /// Handles a touch-down at `touch` on `target`. Touches outside the
    /// target's bounds are ignored and return false.
    ///
    /// On a hit the glow is created (first touch) or moved (every later
    /// touch), intensity restarts from the peak, feedback fires, and the
    /// target is launched if it has one.
    pub fn touch_down(
        &mut self,
        touch: Point,
        target: &TouchTarget,
        services: &PlatformServices,
    ) -> bool {
        if !target.bounds.contains(touch) {
            return false;
        }

        match &mut self.selection {
            Selection::Idle => {
                let intensity = SegmentedTween::glow_decay(&self.config);
                let glow = GlowState::new(target.bounds, intensity.value(), self.config.color);
                tracing::debug!(item = target.item.0, "selection glow created");
                self.selection = Selection::Active {
                    item: target.item,
                    glow,
                    intensity,
                };
            }
            Selection::Active {
                item,
                glow,
                intensity,
            } => {
                intensity.restart();
                glow.set_rect(target.bounds);
                glow.set_intensity(intensity.value());
                *item = target.item;
            }
        }

        services.feedback();
        if let Some(launch) = &target.launch {
            services.launch(launch);
        }
        true
    }

    /// Advances the intensity curve by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if let Selection::Active {
            glow, intensity, ..
        } = &mut self.selection
        {
            intensity.advance(dt);
            glow.set_intensity(intensity.value());
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.selection, Selection::Active { .. })
    }

    pub fn glow(&self) -> Option<&GlowState> {
        match &self.selection {
            Selection::Active { glow, .. } => Some(glow),
            Selection::Idle => None,
        }
    }

    pub fn selected(&self) -> Option<ItemId> {
        match &self.selection {
            Selection::Active { item, .. } => Some(*item),
            Selection::Idle => None,
        }
    }

    pub fn intensity(&self) -> Option<&SegmentedTween> {
        match &self.selection {
            Selection::Active { intensity, .. } => Some(intensity),
            Selection::Idle => None,
        }
    }
}
