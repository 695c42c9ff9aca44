//! Desktop implementations of the launcher capabilities.

use starfall_core::config::Config;
use starfall_core::platform::{AppLauncher, AudioCue, LaunchTarget, NoHaptics, PlatformServices};
use starfall_core::PlatformError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Opens targets (paths, URLs, executables) with the system handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenLauncher;

impl AppLauncher for OpenLauncher {
    fn launch(&self, target: &LaunchTarget) -> Result<(), PlatformError> {
        tracing::info!(target = %target, "launching");
        open::that_detached(target.as_str()).map_err(|err| PlatformError::LaunchFailed {
            target: target.to_string(),
            message: err.to_string(),
        })
    }
}

/// Plays short clips from the asset directory.
///
/// Each clip gets its own output stream on a detached thread so the caller
/// never waits on audio device setup.
#[derive(Debug, Clone)]
pub struct RodioAudio {
    asset_dir: PathBuf,
}

impl RodioAudio {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    pub fn clip_path(&self, clip: &str) -> PathBuf {
        self.asset_dir.join(clip)
    }
}

impl AudioCue for RodioAudio {
    fn play(&self, clip: &str) -> Result<(), PlatformError> {
        let path = self.clip_path(clip);
        if !path.is_file() {
            return Err(PlatformError::ClipMissing(path.display().to_string()));
        }

        std::thread::Builder::new()
            .name("starfall-audio".to_string())
            .spawn(move || {
                if let Err(err) = play_blocking(&path) {
                    tracing::debug!(path = %path.display(), error = %err, "clip playback failed");
                }
            })?;
        Ok(())
    }
}

fn play_blocking(path: &Path) -> anyhow::Result<()> {
    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    let source = rodio::Decoder::new(BufReader::new(File::open(path)?))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

/// Capabilities available to the desktop shell. Desktops have no vibration motor.
pub fn desktop_services(config: &Config) -> PlatformServices {
    PlatformServices::new(
        Box::new(OpenLauncher),
        Box::new(NoHaptics),
        Box::new(RodioAudio::new(config.asset_dir.clone())),
        config.feedback.clone(),
    )
}
