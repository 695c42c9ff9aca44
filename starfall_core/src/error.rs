//! Centralized error handling for Starfall
//!
//! - `thiserror` for typed errors at the config and platform seams
//! - `anyhow` for application-level paths that only need context
//!
//! The render tick and the touch path are infallible: platform failures are
//! caught inside [`crate::platform::PlatformServices`] and never reach them.

use thiserror::Error;

/// Errors raised while loading or saving launcher configuration.
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Failures reported by host capabilities (launch, haptics, audio, catalogue).
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The capability does not exist on this host.
    #[error("{0} is not available on this platform")]
    Unavailable(&'static str),

    #[error("Failed to launch '{target}': {message}")]
    LaunchFailed { target: String, message: String },

    #[error("Audio clip not loaded: {0}")]
    ClipMissing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlatformError {
    /// Silent degradations: a missing capability or asset is expected on some
    /// hosts and is not worth a warning.
    pub fn is_silent(&self) -> bool {
        matches!(self, PlatformError::Unavailable(_) | PlatformError::ClipMissing(_))
    }
}

/// Result type alias for application-level operations
pub type LauncherResult<T> = anyhow::Result<T>;

/// Extension trait for adding Starfall-specific context to errors
pub trait ResultExt<T> {
    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> LauncherResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_file_context(self, path: &str) -> LauncherResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }
}
