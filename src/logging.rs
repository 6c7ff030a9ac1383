//! Structured logging setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "TORGO_LOG";

/// Filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "torgo=warn",
        1 => "torgo=debug",
        _ => "torgo=trace",
    }
}

/// Initialize logging to stderr.
///
/// `$TORGO_LOG` takes precedence over the verbosity flag.
pub fn init_tracing(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow!(e))
}
