//! Performance benchmarks for the per-frame animation work

use criterion::{criterion_group, criterion_main, Criterion};
use starfall_core::background::BackgroundAnimator;
use starfall_core::catalog::{ItemBounds, ItemId};
use starfall_core::config::{BackgroundConfig, Config, GlowConfig, ParticleConfig};
use starfall_core::draw::DrawLayer;
use starfall_core::geometry::{Point, Rect, Size};
use starfall_core::glow::{GlowCompositor, GlowState};
use starfall_core::particles::ParticleSimulator;
use starfall_core::platform::PlatformServices;
use starfall_core::scene::LauncherScene;
use std::hint::black_box;

const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};
const DT: f32 = 1.0 / 30.0;

struct Rows;

impl ItemBounds for Rows {
    fn item_count(&self) -> usize {
        18
    }

    fn bounds_of(&self, item: ItemId) -> Option<Rect> {
        Some(Rect::new(12.0, 116.0 + item.0 as f32 * 62.0, 1056.0, 56.0))
    }
}

fn bench_particle_step(c: &mut Criterion) {
    c.bench_function("particle_step_pool_24", |b| {
        let mut sim = ParticleSimulator::seeded(ParticleConfig::default(), 1);
        let mut pool = sim.initialize(24, VIEWPORT);
        b.iter(|| {
            let recycled = sim.step_pool(&mut pool, black_box(DT), VIEWPORT);
            black_box(recycled);
        });
    });

    c.bench_function("particle_step_pool_500", |b| {
        let mut sim = ParticleSimulator::seeded(ParticleConfig::default(), 1);
        let mut pool = sim.initialize(500, VIEWPORT);
        b.iter(|| {
            let recycled = sim.step_pool(&mut pool, black_box(DT), VIEWPORT);
            black_box(recycled);
        });
    });
}

fn bench_background_tick(c: &mut Criterion) {
    c.bench_function("background_tick", |b| {
        let sim = ParticleSimulator::seeded(ParticleConfig::default(), 2);
        let mut bg = BackgroundAnimator::with_simulator(BackgroundConfig::default(), sim, 24, VIEWPORT);
        b.iter(|| {
            bg.tick(black_box(DT));
            black_box(bg.particle_layer().len());
        });
    });
}

fn bench_glow_render(c: &mut Criterion) {
    let compositor = GlowCompositor::new(&GlowConfig::default());
    let state = GlowState::new(
        Rect::new(12.0, 116.0, 1056.0, 56.0),
        0.75,
        GlowConfig::default().color,
    );

    c.bench_function("glow_render_into", |b| {
        let mut layer = DrawLayer::with_capacity(compositor.layer_count());
        b.iter(|| {
            compositor.render_into(black_box(&state), &mut layer);
            black_box(layer.len());
        });
    });
}

fn bench_scene_frame(c: &mut Criterion) {
    c.bench_function("scene_tick_with_touch", |b| {
        let mut scene = LauncherScene::new(&Config::default(), VIEWPORT, PlatformServices::headless());
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            if frame % 15 == 0 {
                let y = 120.0 + (frame % 18) as f32 * 62.0;
                black_box(scene.touch_down(Point::new(40.0, y), &Rows, &[]));
            }
            scene.tick(black_box(DT));
        });
    });
}

criterion_group!(
    benches,
    bench_particle_step,
    bench_background_tick,
    bench_glow_render,
    bench_scene_frame
);
criterion_main!(benches);
