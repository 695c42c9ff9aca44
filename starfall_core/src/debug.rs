//! Debug switch shared by the core and the desktop shell.
//!
//! # Environment Variables
//!
//! - `STARFALL_DEBUG=1` - raise the default log filter to `debug`

use std::sync::OnceLock;

/// Cached debug enabled state (checked once at startup)
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("STARFALL_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if is_debug_enabled() {
        "starfall_core=debug,starfall_desktop=debug,warn"
    } else {
        "starfall_core=info,starfall_desktop=info,warn"
    }
}
