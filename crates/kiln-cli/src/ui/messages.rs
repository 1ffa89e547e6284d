//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

fn emit(symbol: &str, painted_symbol: String, message: &str, painted_message: String) {
    if is_quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", painted_symbol, painted_message);
    } else {
        eprintln!("{} {}", symbol, message);
    }
}

/// Print a success message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    emit("✓", "✓".green().bold().to_string(), message, message.to_string());
}

/// Print an info message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::info;
///
/// info("Checking production configuration");
/// ```
pub fn info(message: &str) {
    emit("ℹ", "ℹ".blue().bold().to_string(), message, message.to_string());
}

/// Print a warning message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::warning;
///
/// warning("font.svg matches more than one rule; the first one wins");
/// ```
pub fn warning(message: &str) {
    emit("⚠", "⚠".yellow().bold().to_string(), message, message.yellow().to_string());
}
