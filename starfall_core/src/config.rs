use crate::animation::Easing;
use crate::color::{self, Rgba};
use crate::constants::*;
use crate::error::{LauncherError, LauncherResult, ResultExt};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Inclusive numeric range used for randomized particle attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, name: &str) -> Result<(), LauncherError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(LauncherError::Config(format!(
                "{}: expected min <= max, got [{}, {}]",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

impl From<(f32, f32)> for Span {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the background image and audio clips.
    pub asset_dir: PathBuf,
    pub particles: ParticleConfig,
    pub background: BackgroundConfig,
    pub glow: GlowConfig,
    pub feedback: FeedbackConfig,
    /// Launch entries shown in the list. Empty means the sample list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<AppEntryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            particles: ParticleConfig::default(),
            background: BackgroundConfig::default(),
            glow: GlowConfig::default(),
            feedback: FeedbackConfig::default(),
            apps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    /// Per-tick multiplier applied to horizontal velocity.
    pub drag: f32,
    /// Scale of the random horizontal impulse, in px/s².
    pub turbulence: f32,
    /// How far past the left/right edge a particle may drift before recycling.
    pub horizontal_margin: f32,
    pub velocity_x: Span,
    pub velocity_y: Span,
    pub size: Span,
    pub alpha: Span,
    pub palette: Vec<Rgba>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            drag: PARTICLE_DRAG,
            turbulence: PARTICLE_TURBULENCE,
            horizontal_margin: PARTICLE_HORIZONTAL_MARGIN,
            velocity_x: PARTICLE_VELOCITY_X.into(),
            velocity_y: PARTICLE_VELOCITY_Y.into(),
            size: PARTICLE_SIZE.into(),
            alpha: PARTICLE_ALPHA.into(),
            palette: color::particle_palette(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub tick_hz: u32,
    pub pulse_amplitude: f32,
    pub pulse_rate: f32,
    pub parallax_factor: f32,
    pub halo_scale: f32,
    pub halo_alpha: f32,
    /// Background image, relative to `asset_dir`.
    pub image: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_rate: PULSE_RATE,
            parallax_factor: PARALLAX_FACTOR,
            halo_scale: HALO_SCALE,
            halo_alpha: HALO_ALPHA,
            image: BACKGROUND_IMAGE.to_string(),
        }
    }
}

impl BackgroundConfig {
    /// Seconds between two animation ticks.
    pub fn tick_period(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub layers: usize,
    pub layer_spread: f32,
    pub cooling_spread: f32,
    pub base_alpha: f32,
    pub corner_radius: f32,
    pub peak: f32,
    pub settle: f32,
    pub residue: f32,
    pub settle_seconds: f32,
    pub residue_seconds: f32,
    pub easing: Easing,
    /// RGB of the highlight; `a` is the design-time maximum layer alpha.
    pub color: Rgba,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            layers: GLOW_LAYERS,
            layer_spread: GLOW_LAYER_SPREAD,
            cooling_spread: GLOW_COOLING_SPREAD,
            base_alpha: GLOW_BASE_ALPHA,
            corner_radius: GLOW_CORNER_RADIUS,
            peak: GLOW_PEAK,
            settle: GLOW_SETTLE,
            residue: GLOW_RESIDUE,
            settle_seconds: GLOW_SETTLE_SECONDS,
            residue_seconds: GLOW_RESIDUE_SECONDS,
            easing: Easing::default(),
            color: color::GLOW_BLUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub haptics: bool,
    pub haptic_seconds: f32,
    pub sound: bool,
    pub select_clip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_clip: Option<String>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            haptics: true,
            haptic_seconds: HAPTIC_SECONDS,
            sound: true,
            select_clip: SELECT_CLIP.to_string(),
            hover_clip: Some(HOVER_CLIP.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppEntryConfig {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LauncherResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_file_context(&path.display().to_string())?;
        let config: Config = toml::from_str(&content).map_err(LauncherError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> LauncherResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context(&parent.display().to_string())?;
        }

        let content = toml::to_string_pretty(self).map_err(LauncherError::from)?;
        fs::write(path, content).with_file_context(&path.display().to_string())?;
        Ok(())
    }

    /// `STARFALL_CONFIG` if set, otherwise `<config dir>/starfall/config.toml`.
    pub fn get_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("STARFALL_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("starfall")
            .join("config.toml")
    }

    /// Loads the user config, falling back to defaults when it is missing or bad.
    pub fn load_or_default() -> Self {
        let path = Self::get_config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> LauncherResult<()> {
        self.save_to_file(Self::get_config_path())
    }

    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }

    pub fn validate(&self) -> Result<(), LauncherError> {
        let p = &self.particles;
        p.velocity_x.check("particles.velocity_x")?;
        p.velocity_y.check("particles.velocity_y")?;
        p.size.check("particles.size")?;
        p.alpha.check("particles.alpha")?;
        if p.size.min <= 0.0 {
            return Err(LauncherError::Config(
                "particles.size: min must be positive".to_string(),
            ));
        }
        if p.alpha.min <= 0.0 || p.alpha.max > 1.0 {
            return Err(LauncherError::Config(
                "particles.alpha: must lie in (0, 1]".to_string(),
            ));
        }
        if p.palette.is_empty() {
            return Err(LauncherError::Config(
                "particles.palette: at least one colour is required".to_string(),
            ));
        }
        if p.drag < 0.0 || p.horizontal_margin < 0.0 {
            return Err(LauncherError::Config(
                "particles: drag and horizontal_margin must not be negative".to_string(),
            ));
        }

        let b = &self.background;
        if b.tick_hz == 0 {
            return Err(LauncherError::Config(
                "background.tick_hz: must be at least 1".to_string(),
            ));
        }
        if b.halo_scale <= 0.0 {
            return Err(LauncherError::Config(
                "background.halo_scale: must be positive".to_string(),
            ));
        }

        let g = &self.glow;
        if g.layers == 0 {
            return Err(LauncherError::Config(
                "glow.layers: at least one layer is required".to_string(),
            ));
        }
        for (name, value) in [("peak", g.peak), ("settle", g.settle), ("residue", g.residue)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LauncherError::Config(format!(
                    "glow.{}: intensity must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }
        let durations = [
            ("settle_seconds", g.settle_seconds),
            ("residue_seconds", g.residue_seconds),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(LauncherError::Config(format!(
                    "glow.{}: must be a finite, non-negative duration, got {}",
                    name, value
                )));
            }
        }

        let haptic = self.feedback.haptic_seconds;
        if !(0.0..=MAX_HAPTIC_SECONDS).contains(&haptic) {
            return Err(LauncherError::Config(format!(
                "feedback.haptic_seconds: must lie in [0, {}], got {}",
                MAX_HAPTIC_SECONDS, haptic
            )));
        }
        Ok(())
    }
}
