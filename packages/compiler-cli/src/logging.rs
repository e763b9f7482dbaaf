//! Logging
//!
//! Installs the global `tracing` subscriber for the CLI. Output goes to
//! stderr so it never mixes with rewritten templates on stdout.

use tracing_subscriber::EnvFilter;

/// Level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter: an explicit level wins, then `RUST_LOG`, then
/// [`DEFAULT_LOG_LEVEL`].
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::builder().parse_lossy(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::builder().parse_lossy(DEFAULT_LOG_LEVEL)),
    }
}

/// Initialise the global tracing subscriber. Calling it twice is harmless.
pub fn init_logging(level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
