// Animation timing
pub const TICK_HZ: u32 = 30;
pub const MAX_FRAME_DT: f32 = 0.25;

// Particles
pub const PARTICLE_COUNT: usize = 24;
pub const PARTICLE_VELOCITY_X: (f32, f32) = (-10.0, 10.0);
pub const PARTICLE_VELOCITY_Y: (f32, f32) = (5.0, 40.0);
pub const PARTICLE_SIZE: (f32, f32) = (6.0, 28.0);
pub const PARTICLE_ALPHA: (f32, f32) = (0.06, 0.22);
pub const PARTICLE_DRAG: f32 = 0.995;
pub const PARTICLE_TURBULENCE: f32 = 50.0;
pub const PARTICLE_HORIZONTAL_MARGIN: f32 = 50.0;

// Background pulse and parallax
pub const PULSE_AMPLITUDE: f32 = 0.008;
pub const PULSE_RATE: f32 = 0.02;
pub const PARALLAX_FACTOR: f32 = 0.2;
pub const HALO_SCALE: f32 = 1.6;
pub const HALO_ALPHA: f32 = 0.6;

// Selection glow
pub const GLOW_LAYERS: usize = 5;
pub const GLOW_LAYER_SPREAD: f32 = 0.08;
pub const GLOW_COOLING_SPREAD: f32 = 0.1;
pub const GLOW_BASE_ALPHA: f32 = 0.18;
pub const GLOW_CORNER_RADIUS: f32 = 8.0;
pub const GLOW_PEAK: f32 = 1.0;
pub const GLOW_SETTLE: f32 = 0.9;
pub const GLOW_RESIDUE: f32 = 0.6;
pub const GLOW_SETTLE_SECONDS: f32 = 0.18;
pub const GLOW_RESIDUE_SECONDS: f32 = 0.35;

// Feedback
pub const HAPTIC_SECONDS: f32 = 0.05;
pub const MAX_HAPTIC_SECONDS: f32 = 2.0;
pub const SELECT_CLIP: &str = "select.wav";
pub const HOVER_CLIP: &str = "hover.wav";
pub const BACKGROUND_IMAGE: &str = "bg.jpg";

// Desktop fallback catalogue
pub const SAMPLE_APP_COUNT: usize = 18;
