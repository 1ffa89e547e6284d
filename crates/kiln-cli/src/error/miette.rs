//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use kiln_config::ConfigError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        other => miette::miette!("{}", other),
    }
}

/// Convert a configuration error, attaching its hint as miette help
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint.to_string(), "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}
