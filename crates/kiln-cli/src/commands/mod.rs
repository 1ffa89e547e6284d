//! Command implementations for the Kiln CLI.
//!
//! - [`print`] - Render the configuration as JSON
//! - [`check`] - Validate the configuration
//! - [`route`] - Look up the rule for a file
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod print;
pub mod route;

use std::path::PathBuf;

use kiln_config::{Mode, Settings, resolve_mode};
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::error::Result;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use print::execute as print_execute;
pub use route::execute as route_execute;

/// Everything a command needs before assembling a configuration.
#[derive(Debug)]
pub(crate) struct Project {
    pub cwd: PathBuf,
    pub settings: Settings,
    pub context: PathBuf,
    pub mode: Mode,
}

/// Load settings and resolve the context directory and build mode.
///
/// The mode is resolved here, once: an explicit `--mode` wins, otherwise
/// `NODE_ENV` decides.
pub(crate) fn load_project(args: &ProjectArgs) -> Result<Project> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let context = match &args.context {
        Some(dir) => cwd.join(dir),
        None => settings.context_dir(&cwd),
    };
    let mode = args.mode.map(Mode::from).unwrap_or_else(resolve_mode);

    debug!(cwd = %cwd.display(), context = %context.display(), %mode, "loaded project");
    Ok(Project {
        cwd,
        settings,
        context,
        mode,
    })
}
