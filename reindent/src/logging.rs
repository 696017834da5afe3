//! Logging setup.
//!
//! Logs go to stderr so stdout only carries the rewrite summary.
//! `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` with
//! `--verbose`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Picks the filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed, which happens when
/// the entry point runs more than once in a process (tests).
pub fn init_logging(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
