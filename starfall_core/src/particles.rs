//! Ambient particle field.
//!
//! A fixed pool of soft specks drifts downward across the viewport. Particles
//! are never created or destroyed after initialization: one that leaves the
//! visible region is recycled in place with fresh random attributes and
//! re-enters just above the top edge.

use crate::color::Rgba;
use crate::config::ParticleConfig;
use crate::geometry::{Point, Size};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One ambient background speck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Top-left of the particle's bounding square, in window pixels.
    pub x: f32,
    pub y: f32,
    /// Velocity in px/s.
    pub vx: f32,
    pub vy: f32,
    /// Diameter in px.
    pub size: f32,
    pub color: Rgba,
    /// Render opacity.
    pub alpha: f32,
}

impl Particle {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// True once the particle has left the region it is allowed to occupy:
    /// its top edge is below the bottom, or it drifted more than `margin`
    /// past either side.
    pub fn has_escaped(&self, bounds: Size, margin: f32) -> bool {
        self.y > bounds.height || self.x < -margin || self.x > bounds.width + margin
    }
}

/// Fixed-cardinality particle storage. Slots are reused across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }
}

/// Owns the random source and tuning for spawning and stepping particles.
#[derive(Debug, Clone)]
pub struct ParticleSimulator<R: Rng = StdRng> {
    config: ParticleConfig,
    rng: R,
}

impl ParticleSimulator<StdRng> {
    pub fn new(config: ParticleConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(config: ParticleConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleSimulator<R> {
    pub fn with_rng(config: ParticleConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Creates `count` particles spread uniformly over `bounds`.
    pub fn initialize(&mut self, count: usize, bounds: Size) -> ParticlePool {
        let particles = (0..count).map(|_| self.spawn(bounds)).collect();
        ParticlePool { particles }
    }

    /// Samples a fresh particle anywhere inside `bounds`.
    pub fn spawn(&mut self, bounds: Size) -> Particle {
        let mut particle = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: self.config.size.min,
            color: Rgba::WHITE,
            alpha: self.config.alpha.max,
        };
        self.respawn(&mut particle, bounds);
        particle
    }

    /// Overwrites every attribute of `particle` with a new random state.
    pub fn respawn(&mut self, particle: &mut Particle, bounds: Size) {
        let rng = &mut self.rng;
        particle.x = sample_axis(rng, bounds.width);
        particle.y = sample_axis(rng, bounds.height);
        particle.vx = self.config.velocity_x.sample(rng);
        particle.vy = self.config.velocity_y.sample(rng);
        particle.size = self.config.size.sample(rng);
        particle.color = self
            .config
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(Rgba::WHITE);
        particle.alpha = self.config.alpha.sample(rng);
    }

    /// Advances one particle by `dt` seconds. Returns true if it was recycled.
    pub fn step(&mut self, particle: &mut Particle, dt: f32, bounds: Size) -> bool {
        particle.x += particle.vx * dt;
        particle.y += particle.vy * dt;
        particle.vx *= self.config.drag;
        particle.vx += self.rng.gen_range(-1.0f32..=1.0) * dt * self.config.turbulence;

        if particle.has_escaped(bounds, self.config.horizontal_margin) {
            self.respawn(particle, bounds);
            // Recycled particles always re-enter from above, whichever edge they left by.
            particle.y = -particle.size;
            return true;
        }
        false
    }

    /// Steps every particle in the pool. Returns how many were recycled.
    pub fn step_pool(&mut self, pool: &mut ParticlePool, dt: f32, bounds: Size) -> usize {
        let mut recycled = 0;
        for particle in pool.iter_mut() {
            if self.step(particle, dt, bounds) {
                recycled += 1;
            }
        }
        recycled
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent <= 0.0 {
        0.0
    } else {
        rng.gen_range(0.0..=extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> ParticleSimulator {
        ParticleSimulator::seeded(ParticleConfig::default(), 42)
    }

    fn assert_fresh(particle: &Particle, config: &ParticleConfig) {
        assert!(config.velocity_x.contains(particle.vx), "vx {}", particle.vx);
        assert!(config.velocity_y.contains(particle.vy), "vy {}", particle.vy);
        assert!(config.size.contains(particle.size), "size {}", particle.size);
        assert!(config.alpha.contains(particle.alpha), "alpha {}", particle.alpha);
        assert!(config.palette.contains(&particle.color));
    }

    #[test]
    fn test_initialize_within_bounds() {
        let mut sim = simulator();
        let bounds = Size::new(320.0, 480.0);
        let pool = sim.initialize(24, bounds);
        assert_eq!(pool.len(), 24);
        for p in pool.iter() {
            assert!((0.0..=bounds.width).contains(&p.x));
            assert!((0.0..=bounds.height).contains(&p.y));
            assert_fresh(p, sim.config());
        }
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut config = ParticleConfig::default();
        config.turbulence = 0.0;
        let mut sim = ParticleSimulator::seeded(config, 1);
        let mut p = sim.spawn(Size::new(200.0, 200.0));
        p.x = 100.0;
        p.y = 50.0;
        p.vx = 10.0;
        p.vy = 20.0;

        let recycled = sim.step(&mut p, 0.5, Size::new(200.0, 200.0));
        assert!(!recycled);
        assert!((p.x - 105.0).abs() < 1e-4);
        assert!((p.y - 60.0).abs() < 1e-4);
        assert!((p.vx - 9.95).abs() < 1e-4);
    }

    #[test]
    fn test_turbulence_is_bounded() {
        let mut sim = simulator();
        let bounds = Size::new(1000.0, 1000.0);
        let mut p = sim.spawn(bounds);
        p.x = 500.0;
        p.y = 500.0;
        p.vx = 0.0;
        sim.step(&mut p, 0.1, bounds);
        // |U(-1,1)| * 0.1 * 50
        assert!(p.vx.abs() <= 5.0 + 1e-4);
    }

    #[test]
    fn test_falling_below_bottom_recycles_from_top() {
        let mut sim = simulator();
        let bounds = Size::new(100.0, 100.0);
        let mut p = sim.spawn(bounds);
        p.x = 50.0;
        p.y = 95.0;
        p.size = 10.0;
        p.vy = 40.0;

        assert!(sim.step(&mut p, 0.2, bounds));
        assert_eq!(p.y, -p.size);
        assert_fresh(&p, sim.config());
    }

    #[test]
    fn test_horizontal_escape_recycles_from_top() {
        let mut sim = simulator();
        let bounds = Size::new(100.0, 100.0);
        for start_x in [-60.0, 160.0] {
            let mut p = sim.spawn(bounds);
            p.x = start_x;
            p.y = 40.0;
            p.vx = 0.0;
            p.vy = 5.0;
            assert!(sim.step(&mut p, 0.01, bounds));
            assert_eq!(p.y, -p.size);
            assert!((0.0..=bounds.width).contains(&p.x));
        }
    }

    #[test]
    fn test_inside_margin_not_recycled() {
        let mut config = ParticleConfig::default();
        config.turbulence = 0.0;
        let mut sim = ParticleSimulator::seeded(config, 3);
        let bounds = Size::new(100.0, 100.0);
        let mut p = sim.spawn(bounds);
        p.x = 140.0;
        p.y = 10.0;
        p.vx = 0.0;
        p.vy = 5.0;
        assert!(!sim.step(&mut p, 0.1, bounds));
        assert_eq!(p.x, 140.0);
    }

    #[test]
    fn test_pool_cardinality_constant() {
        let mut sim = simulator();
        let bounds = Size::new(100.0, 100.0);
        let mut pool = sim.initialize(3, bounds);
        let mut total_recycled = 0;
        for _ in 0..2000 {
            total_recycled += sim.step_pool(&mut pool, 1.0 / 30.0, bounds);
            assert_eq!(pool.len(), 3);
        }
        assert!(total_recycled > 0);
    }

    #[test]
    fn test_zero_area_bounds() {
        let mut sim = simulator();
        let mut pool = sim.initialize(4, Size::ZERO);
        for _ in 0..10 {
            sim.step_pool(&mut pool, 1.0 / 30.0, Size::ZERO);
        }
        assert_eq!(pool.len(), 4);
        for p in pool.iter() {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn test_center_is_offset_by_half_size() {
        let mut sim = simulator();
        let mut p = sim.spawn(Size::new(10.0, 10.0));
        p.x = 10.0;
        p.y = 20.0;
        p.size = 8.0;
        assert_eq!(p.center(), Point::new(14.0, 24.0));
    }
}
