//! Log output for the desktop shell.
//!
//! `RUST_LOG` wins when set and valid; otherwise the filter follows
//! `STARFALL_DEBUG` (see [`starfall_core::debug`]).

use starfall_core::debug::default_log_filter;
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let default_filter = default_log_filter();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_filter))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
