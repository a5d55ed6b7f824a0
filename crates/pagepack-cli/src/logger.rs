//! Logging infrastructure for the pagepack CLI.
//!
//! Structured logging on the `tracing` ecosystem. Log lines go to stderr so
//! that stdout stays clean for machine-readable output (`--json`,
//! `pagepack config`).
//!
//! # Example
//!
//! ```rust,no_run
//! use pagepack_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Discovering pages");
//! debug!("Scanning directory: {}", "src");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used by `--verbose`
pub const VERBOSE_FILTER: &str = "pagepack_config=debug,pagepack_cli=debug";

/// Filter used by `--quiet`
pub const QUIET_FILTER: &str = "pagepack_config=error,pagepack_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "pagepack_config=info,pagepack_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Should be called once at the start of the program, before any logging
/// occurs.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for pagepack crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for pagepack crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// # Example
///
/// ```rust,no_run
/// use pagepack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// let filter = EnvFilter::new("pagepack_config=trace");
/// init_logger_with_filter(filter, false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
