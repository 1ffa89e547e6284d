//! Build mode selection.
//!
//! The mode is read from the environment exactly once, at startup, and then
//! passed by value into every construction function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable that selects the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// The only value of [`MODE_ENV_VAR`] that selects a production build.
pub const PRODUCTION_SENTINEL: &str = "production";

/// Development builds keep output debuggable; production builds add the
/// optimization plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Map a raw environment value to a mode.
    ///
    /// Only an exact match on [`PRODUCTION_SENTINEL`] yields `Production`.
    /// Unset, empty, differently-cased or partial values all yield `Development`.
    ///
    /// ```
    /// use kiln_config::Mode;
    ///
    /// assert_eq!(Mode::from_env_value(Some("production")), Mode::Production);
    /// assert_eq!(Mode::from_env_value(Some("Production")), Mode::Development);
    /// assert_eq!(Mode::from_env_value(None), Mode::Development);
    /// ```
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION_SENTINEL) => Mode::Production,
            _ => Mode::Development,
        }
    }

    /// Read [`MODE_ENV_VAR`] from the process environment.
    ///
    /// A value that is not valid unicode counts as unset.
    pub fn from_env() -> Self {
        let raw = std::env::var(MODE_ENV_VAR).ok();
        let mode = Self::from_env_value(raw.as_deref());
        debug!(var = MODE_ENV_VAR, value = ?raw, %mode, "resolved build mode");
        mode
    }

    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => PRODUCTION_SENTINEL,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for explicit overrides (CLI flags, settings files).
///
/// Unlike [`Mode::from_env_value`], unknown names are rejected.
impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Mode::Development),
            PRODUCTION_SENTINEL => Ok(Mode::Production),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Resolve the build mode from the environment.
pub fn resolve_mode() -> Mode {
    Mode::from_env()
}
