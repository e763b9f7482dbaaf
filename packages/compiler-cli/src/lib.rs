#![deny(clippy::all)]

/**
 * Angle Bracket Polyfill CLI
 *
 * Batch driver rewriting serialized template documents from disk.
 */
pub use angle_bracket_polyfill as polyfill;

pub mod config;
pub mod logging;
pub mod perform_transform;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
