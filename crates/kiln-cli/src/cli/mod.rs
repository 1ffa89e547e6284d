//! Command-line interface definition for Kiln.
//!
//! - `kiln print` - Assemble and emit the configuration as JSON
//! - `kiln check` - Validate the assembled configuration
//! - `kiln route` - Show which rule handles a file and where it ends up

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, PrintArgs, ProjectArgs, RouteArgs};
pub use enums::ModeArg;

/// Kiln - typed build configuration for bundlers
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Assemble and inspect bundler build configurations",
    long_about = "Kiln assembles the build configuration handed to the bundler.\n\
                  The build mode is read once from NODE_ENV (or --mode) and decides\n\
                  which optimization plugins are added."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
