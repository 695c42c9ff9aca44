//! Living backdrop: a slowly breathing background image plus the particle field.

use crate::config::{BackgroundConfig, Config};
use crate::draw::{DrawCommand, DrawLayer};
use crate::geometry::{Rect, Size, Vector};
use crate::particles::{ParticlePool, ParticleSimulator};
use rand::rngs::StdRng;
use rand::Rng;

/// Per-frame placement of the background image. Derived, never stored
/// between ticks: it is recomputed from the frame counter every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundTransform {
    pub scale: f32,
    /// Top-left of the scaled image relative to the viewport.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for BackgroundTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl BackgroundTransform {
    /// Keeps the scaled image centred on the viewport, then shifts it by the
    /// parallax signal.
    pub fn at_frame(frame: u64, viewport: Size, parallax: Vector, config: &BackgroundConfig) -> Self {
        let scale = pulse_scale(frame, config);
        let shift = parallax.scaled(config.parallax_factor);
        Self {
            scale,
            offset_x: -(viewport.width * scale - viewport.width) / 2.0 + shift.x,
            offset_y: -(viewport.height * scale - viewport.height) / 2.0 + shift.y,
        }
    }

    /// Where the background image should be drawn for a viewport of `viewport`.
    pub fn image_rect(&self, viewport: Size) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            viewport.width * self.scale,
            viewport.height * self.scale,
        )
    }
}

/// `1 + A·(1 + 0.5·(1 + sin(frame·rate)))`, oscillating in `[1 + A, 1 + 2A]`.
pub fn pulse_scale(frame: u64, config: &BackgroundConfig) -> f32 {
    let wave = (frame as f64 * config.pulse_rate as f64).sin() as f32;
    1.0 + config.pulse_amplitude * (1.0 + 0.5 * (1.0 + wave))
}

/// Drives the background pulse and owns the particle pool.
#[derive(Debug)]
pub struct BackgroundAnimator<R: Rng = StdRng> {
    config: BackgroundConfig,
    frame: u64,
    viewport: Size,
    parallax: Vector,
    transform: BackgroundTransform,
    simulator: ParticleSimulator<R>,
    pool: ParticlePool,
    particle_layer: DrawLayer,
}

impl BackgroundAnimator<StdRng> {
    pub fn new(config: &Config, viewport: Size) -> Self {
        let simulator = ParticleSimulator::new(config.particles.clone());
        Self::with_simulator(config.background.clone(), simulator, config.particles.count, viewport)
    }
}

impl<R: Rng> BackgroundAnimator<R> {
    pub fn with_simulator(
        config: BackgroundConfig,
        mut simulator: ParticleSimulator<R>,
        count: usize,
        viewport: Size,
    ) -> Self {
        let pool = simulator.initialize(count, viewport);
        let mut animator = Self {
            transform: BackgroundTransform::at_frame(0, viewport, Vector::ZERO, &config),
            config,
            frame: 0,
            viewport,
            parallax: Vector::ZERO,
            simulator,
            particle_layer: DrawLayer::with_capacity(count * 2),
            pool,
        };
        animator.rebuild_particle_layer();
        animator
    }

    /// Advances one frame: pulse, particle physics, particle layer.
    /// Returns the number of particles recycled this frame.
    pub fn tick(&mut self, dt: f32) -> usize {
        self.frame += 1;
        self.transform =
            BackgroundTransform::at_frame(self.frame, self.viewport, self.parallax, &self.config);

        let recycled = self.simulator.step_pool(&mut self.pool, dt, self.viewport);
        if recycled > 0 {
            tracing::trace!(frame = self.frame, recycled, "particles recycled");
        }
        self.rebuild_particle_layer();
        recycled
    }

    fn rebuild_particle_layer(&mut self) {
        self.particle_layer.clear();
        for particle in self.pool.iter() {
            let center = particle.center();
            self.particle_layer.push(DrawCommand::Disk {
                center,
                radius: particle.size / 2.0,
                color: particle.color.with_alpha(particle.alpha),
            });
            self.particle_layer.push(DrawCommand::Disk {
                center,
                radius: particle.size * self.config.halo_scale / 2.0,
                color: particle
                    .color
                    .with_alpha(particle.alpha * self.config.halo_alpha),
            });
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.transform =
            BackgroundTransform::at_frame(self.frame, viewport, self.parallax, &self.config);
    }

    /// Hook for tilt or drag input; zero by default.
    pub fn set_parallax(&mut self, x: f32, y: f32) {
        self.parallax = Vector::new(x, y);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn transform(&self) -> BackgroundTransform {
        self.transform
    }

    pub fn image_rect(&self) -> Rect {
        self.transform.image_rect(self.viewport)
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn particle_layer(&self) -> &DrawLayer {
        &self.particle_layer
    }
}
