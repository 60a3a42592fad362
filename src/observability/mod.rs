//! Tracing subscriber setup for embedders.
//!
//! The crate instruments its rebuild, grid, and search paths with `tracing`
//! spans and events. Shells that embed the list core and do not install
//! their own subscriber can use this helper to get formatted output filtered
//! by level.

use tracing_subscriber::EnvFilter;

/// Initializes a formatted tracing subscriber at the given level.
///
/// The level string accepts anything `EnvFilter` understands
/// (`"debug"`, `"appdrawer=trace"`, ...); an unparsable directive falls
/// back to `info`. Idempotent: if a global subscriber is already installed,
/// this call is a no-op.
///
/// # Example
///
/// ```
/// appdrawer::observability::init_tracing("debug");
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
