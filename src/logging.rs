//! # Logging
//!
//! Sets up the `tracing` subscriber. Logs go to stderr so that stdout only
//! ever carries results and stays safe to pipe.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config;

/// Initialize tracing with the level from `STREAMCALC_LOG_LEVEL`
///
/// `verbose` forces the `debug` level regardless of the environment.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "debug".to_string()
    } else {
        config::get_log_level()
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{directive}', using {}", config::DEFAULT_LOG_LEVEL);
        EnvFilter::new(config::DEFAULT_LOG_LEVEL)
    });

    let result = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_ok() {
        tracing::debug!("Tracing initialized with filter '{}'", directive);
    }
}
