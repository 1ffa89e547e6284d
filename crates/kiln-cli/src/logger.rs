//! Logging infrastructure for the Kiln CLI.
//!
//! Logs go to stderr so `kiln print` can stream JSON on stdout.
//!
//! The logging level is determined in this order:
//! 1. `--verbose` flag: DEBUG for kiln crates
//! 2. `--quiet` flag: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: INFO for kiln crates
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Assembling configuration");
//! debug!(mode = "production", "resolved build mode");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "kiln=debug,kiln_config=debug,kiln_cli=debug";
const QUIET_FILTER: &str = "kiln=error,kiln_config=error,kiln_cli=error";
const DEFAULT_FILTER: &str = "kiln=info,kiln_config=info,kiln_cli=info";

/// Pick the filter for the given flags.
///
/// # Arguments
///
/// * `verbose` - Debug level for kiln crates (overrides `quiet`)
/// * `quiet` - Error level only
///
/// Without either flag, `RUST_LOG` is honored before falling back to INFO.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber with the specified options.
///
/// Call once, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
///
/// # Examples
///
/// ```rust,no_run
/// use kiln_cli::logger::init_logger;
///
/// // Default logging (INFO level)
/// init_logger(false, false, false);
///
/// // Quiet mode for scripts piping `kiln print`
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// # Arguments
///
/// * `filter` - Filter to install, e.g. from [`build_filter`]
/// * `no_color` - Disable colored output
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
