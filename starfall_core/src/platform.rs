//! Host capabilities consumed by the animation core.
//!
//! Every capability is best-effort. [`PlatformServices`] calls them and
//! discards the outcome after logging, so neither the render tick nor the
//! touch path ever observes a platform failure.

use crate::config::FeedbackConfig;
use crate::error::PlatformError;
use std::fmt;
use std::time::Duration;

/// Opaque, already-resolved identifier the host knows how to launch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LaunchTarget(pub String);

impl LaunchTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaunchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait AppLauncher: Send {
    fn launch(&self, target: &LaunchTarget) -> Result<(), PlatformError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Haptics: Send {
    fn vibrate(&self, duration: Duration) -> Result<(), PlatformError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AudioCue: Send {
    fn play(&self, clip: &str) -> Result<(), PlatformError>;
}

/// Launcher for hosts that cannot start other applications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLauncher;

impl AppLauncher for NoLauncher {
    fn launch(&self, _target: &LaunchTarget) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable("app launch"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, _duration: Duration) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable("haptics"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl AudioCue for NoAudio {
    fn play(&self, _clip: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable("audio"))
    }
}

/// The capability set handed to the scene, plus the feedback preferences.
pub struct PlatformServices {
    launcher: Box<dyn AppLauncher>,
    haptics: Box<dyn Haptics>,
    audio: Box<dyn AudioCue>,
    feedback: FeedbackConfig,
}

impl PlatformServices {
    pub fn new(
        launcher: Box<dyn AppLauncher>,
        haptics: Box<dyn Haptics>,
        audio: Box<dyn AudioCue>,
        feedback: FeedbackConfig,
    ) -> Self {
        Self {
            launcher,
            haptics,
            audio,
            feedback,
        }
    }

    /// No capabilities at all; every request degrades to a no-op.
    pub fn headless() -> Self {
        Self::new(
            Box::new(NoLauncher),
            Box::new(NoHaptics),
            Box::new(NoAudio),
            FeedbackConfig::default(),
        )
    }

    /// Fires the selection haptic and sound. Fire-and-forget.
    pub fn feedback(&self) {
        if self.feedback.haptics {
            let seconds = self.feedback.haptic_seconds.max(0.0);
            let duration = Duration::try_from_secs_f32(seconds).unwrap_or_default();
            report("haptics", None, self.haptics.vibrate(duration));
        }
        if self.feedback.sound {
            report("audio", None, self.audio.play(&self.feedback.select_clip));
        }
    }

    /// Plays the hover cue, if one is configured.
    pub fn hover_feedback(&self) {
        if !self.feedback.sound {
            return;
        }
        if let Some(clip) = &self.feedback.hover_clip {
            report("audio", None, self.audio.play(clip));
        }
    }

    /// Asks the host to start `target`. Failures are logged, never returned.
    pub fn launch(&self, target: &LaunchTarget) {
        report("launch", Some(target), self.launcher.launch(target));
    }
}

impl fmt::Debug for PlatformServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformServices")
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

fn report(capability: &str, target: Option<&LaunchTarget>, result: Result<(), PlatformError>) {
    match result {
        Ok(()) => {}
        Err(err) if err.is_silent() => {
            tracing::debug!(capability, error = %err, "capability skipped");
        }
        Err(err) => {
            let target = target.map(LaunchTarget::as_str).unwrap_or("-");
            tracing::warn!(capability, target, error = %err, "platform request failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services(
        launcher: MockAppLauncher,
        haptics: MockHaptics,
        audio: MockAudioCue,
        feedback: FeedbackConfig,
    ) -> PlatformServices {
        PlatformServices::new(Box::new(launcher), Box::new(haptics), Box::new(audio), feedback)
    }

    #[test]
    fn test_feedback_requests_haptic_and_sound() {
        let mut haptics = MockHaptics::new();
        haptics
            .expect_vibrate()
            .withf(|d| (d.as_secs_f32() - 0.05).abs() < 1e-6)
            .times(1)
            .returning(|_| Ok(()));
        let mut audio = MockAudioCue::new();
        audio
            .expect_play()
            .withf(|clip| clip == "select.wav")
            .times(1)
            .returning(|_| Ok(()));

        services(MockAppLauncher::new(), haptics, audio, FeedbackConfig::default()).feedback();
    }

    #[test]
    fn test_disabled_feedback_is_not_requested() {
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().times(0);
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(0);

        let feedback = FeedbackConfig {
            haptics: false,
            sound: false,
            ..FeedbackConfig::default()
        };
        services(MockAppLauncher::new(), haptics, audio, feedback).feedback();
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut launcher = MockAppLauncher::new();
        launcher.expect_launch().times(1).returning(|t| {
            Err(PlatformError::LaunchFailed {
                target: t.to_string(),
                message: "activity not found".into(),
            })
        });
        let mut haptics = MockHaptics::new();
        haptics
            .expect_vibrate()
            .returning(|_| Err(PlatformError::Unavailable("haptics")));
        let mut audio = MockAudioCue::new();
        audio
            .expect_play()
            .returning(|clip| Err(PlatformError::ClipMissing(clip.to_string())));

        let services = services(launcher, haptics, audio, FeedbackConfig::default());
        services.feedback();
        services.launch(&LaunchTarget::new("org.example.mail"));
    }

    #[test]
    fn test_unrepresentable_haptic_duration_degrades_to_zero() {
        let mut haptics = MockHaptics::new();
        haptics
            .expect_vibrate()
            .withf(|d| d.is_zero())
            .times(1)
            .returning(|_| Ok(()));
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(1).returning(|_| Ok(()));

        let feedback = FeedbackConfig {
            haptic_seconds: f32::INFINITY,
            ..FeedbackConfig::default()
        };
        services(MockAppLauncher::new(), haptics, audio, feedback).feedback();
    }

    #[test]
    fn test_hover_feedback_plays_hover_clip() {
        let mut audio = MockAudioCue::new();
        audio
            .expect_play()
            .withf(|clip| clip == "hover.wav")
            .times(1)
            .returning(|_| Ok(()));
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().times(0);

        services(MockAppLauncher::new(), haptics, audio, FeedbackConfig::default()).hover_feedback();
    }

    #[test]
    fn test_hover_feedback_without_clip_is_silent() {
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(0);
        let feedback = FeedbackConfig {
            hover_clip: None,
            ..FeedbackConfig::default()
        };
        services(MockAppLauncher::new(), MockHaptics::new(), audio, feedback).hover_feedback();
    }

    #[test]
    fn test_headless_is_a_no_op() {
        let services = PlatformServices::headless();
        services.feedback();
        services.launch(&LaunchTarget::new("anything"));
    }
}
