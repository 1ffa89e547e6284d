use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the configuration and print it as JSON
    ///
    /// The output is the object the bundler consumes. Without --output it is
    /// written to stdout so it can be piped straight into the engine.
    Print(PrintArgs),

    /// Validate the assembled configuration
    ///
    /// Checks plugin ordering, rule patterns and stylesheet extraction targets.
    /// With --fs, also checks that entry points and lint directories exist.
    Check(CheckArgs),

    /// Show which rule handles a file
    ///
    /// Prints the matching rule, its loader pipeline, and for assets whether
    /// the file is inlined or emitted. FILE is resolved against the context
    /// directory (--context, else the `context` setting, else the current
    /// directory).
    Route(RouteArgs),
}

/// Options shared by every command that assembles a configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Build mode (defaults to NODE_ENV)
    ///
    /// Only NODE_ENV=production selects a production build; anything else,
    /// including an unset variable, is a development build.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project context directory (defaults to kiln.toml `context`, then cwd)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub context: Option<PathBuf>,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Also check that referenced paths exist on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the route command
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// File to look up, relative to the context directory
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Size in bytes (read from the file when omitted)
    #[arg(short, long, value_name = "BYTES")]
    pub size: Option<u64>,

    #[command(flatten)]
    pub project: ProjectArgs,
}
