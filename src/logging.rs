//! Logging configuration and initialization
//!
//! Library code logs through the `log` facade; the subscriber installed here
//! bridges those records into `tracing` and writes them to stderr.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `-v` flags take precedence; without them `RUST_LOG` applies, then `warn`.
fn build_filter(verbose: u8) -> EnvFilter {
    if verbose > 0 {
        return EnvFilter::new(log_level(verbose));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(0)))
}

/// Initialize tracing/logging for the application
pub fn init_logging(verbose: u8) {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init()
        .is_ok();

    if initialized {
        debug!("spreadkit started with verbosity level: {}", verbose);
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
