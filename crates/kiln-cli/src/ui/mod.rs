//! Terminal status messages.
//!
//! Messages go to stderr; stdout is reserved for command output. Colors stay
//! off and messages stay on until [`init_ui`] runs.

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status messages are colored and whether they are shown.
///
/// # Arguments
///
/// * `no_color` - Disable colored output regardless of the terminal
/// * `quiet` - Suppress every status message
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::init_ui;
///
/// // Colors when the terminal supports them, messages on
/// init_ui(false, false);
///
/// // `--quiet`: nothing but the error report reaches stderr
/// init_ui(false, true);
/// ```
pub fn init_ui(no_color: bool, quiet: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether status messages are colored. False until [`init_ui`] enables it.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
