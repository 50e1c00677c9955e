//! Diagnostic logging setup.
//!
//! Logs go to stderr so that stdout carries only the rendered state. The
//! filter comes from `RUST_LOG` when set, otherwise from the `[logging]`
//! config section, or `debug` when running verbose.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Filter directive to use when `RUST_LOG` is not set.
pub fn default_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

pub fn init(config: &LoggingConfig, verbose: bool) {
    let directive = default_directive(config, verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // A subscriber may already be installed (tests, embedding binaries)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
