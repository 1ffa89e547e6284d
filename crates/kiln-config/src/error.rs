//! Error types for configuration validation and settings loading.
//!
//! Assembling a [`BuildConfiguration`](crate::BuildConfiguration) never fails;
//! these errors come from validators, settings layering and serialization.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("rule include directory not found: {}", path.display())]
    IncludeNotFound { path: PathBuf },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("unknown build mode `{0}` (expected `development` or `production`)")]
    UnknownMode(String),

    // Settings layering errors
    #[error("invalid settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn schema(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint attached to schema errors, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { hint, .. } => hint.as_deref(),
            Self::NoEntries => Some("Add at least one entry point"),
            Self::EntryNotFound { .. } => Some("Entry paths are resolved against the context directory"),
            _ => None,
        }
    }
}
