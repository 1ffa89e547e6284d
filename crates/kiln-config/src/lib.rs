//! Typed build configuration for webpack-style bundlers.
//!
//! The configuration is assembled once from a [`Mode`] and handed to an
//! external engine as JSON:
//!
//! ```
//! use std::path::Path;
//! use kiln_config::{assemble, validate_schema, Mode};
//!
//! let mode = Mode::from_env_value(Some("production"));
//! let config = assemble(mode, Path::new("/project"));
//! validate_schema(&config).unwrap();
//!
//! let json = config.to_value().unwrap();
//! assert_eq!(json["output"]["filename"], "bundle.js");
//! ```

pub mod asset;
pub mod config;
pub mod error;
pub mod loader;
pub mod mode;
pub mod output;
pub mod plugin;
pub mod resolve;
pub mod rule;
pub mod settings;
pub mod validation;

// Re-export main types
pub use asset::*;
pub use config::*;
pub use error::*;
pub use loader::{LoaderSpec, render_pipeline};
pub use mode::*;
pub use output::*;
pub use plugin::*;
pub use resolve::*;
pub use rule::*;
pub use settings::*;

pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
