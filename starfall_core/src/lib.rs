//! Animation core for the Starfall launcher.
//!
//! Everything here is host-agnostic: the scene is driven by a frame callback
//! and touch events, and produces retained [`draw::DrawLayer`]s plus a
//! background image transform for the host to paint.

pub mod animation;
pub mod background;
pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod debug;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod glow;
pub mod particles;
pub mod platform;
pub mod scene;
pub mod selection;

pub use animation::{Easing, SegmentedTween, TweenSegment};
pub use background::{BackgroundAnimator, BackgroundTransform};
pub use catalog::{AppCatalog, ConfiguredCatalog, ItemBounds, ItemId, LaunchEntry, SampleCatalog};
pub use color::Rgba;
pub use config::Config;
pub use draw::{DrawCommand, DrawLayer};
pub use error::{LauncherError, LauncherResult, PlatformError, ResultExt};
pub use geometry::{Point, Rect, Size, Vector};
pub use glow::{GlowCompositor, GlowState};
pub use particles::{Particle, ParticlePool, ParticleSimulator};
pub use platform::{AppLauncher, AudioCue, Haptics, LaunchTarget, PlatformServices};
pub use scene::LauncherScene;
pub use selection::{SelectionController, TouchTarget};
