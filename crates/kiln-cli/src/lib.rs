//! Kiln CLI - assemble and inspect bundler build configurations.
//!
//! The CLI is the driver around [`kiln_config`]: it resolves the build mode
//! once, assembles the configuration, and either renders it for the engine or
//! inspects it.
//!
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr
//! - [`cli`] - argument definitions
//! - [`commands`] - `print`, `check` and `route`

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
