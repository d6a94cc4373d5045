//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so they never mix with the intro drawn on stdout.
//!
//! # Log Levels
//!
//! - `error`: intro steps skipped because a region is missing
//! - `warn`: session or config trouble that was worked around
//! - `info`: sequence start/complete, visit decision
//! - `debug`: stage transitions, reveals, session file access
//! - `trace`: every timer dispatch

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a level. Without `-v` only warnings and errors show.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("termintro={}", level.as_str().to_ascii_lowercase()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
