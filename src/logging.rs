//! Diagnostic logging
//!
//! Logs go to stderr so they never interleave with the board on stdout.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level` when it is set and parses.
/// Calling this more than once is harmless; later calls keep the first
/// subscriber.
///
/// # Errors
/// Returns an error if `level` is not a valid filter directive.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(level)?,
    };

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
}
