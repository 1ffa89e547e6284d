//! Driver settings layered from defaults, `kiln.toml` and `KILN_*` variables.
//!
//! These control how the configuration is emitted, never what it contains.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub const SETTINGS_FILE: &str = "kiln.toml";
pub const ENV_PREFIX: &str = "KILN_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Context directory; defaults to the directory settings were loaded from.
    #[serde(default)]
    pub context: Option<PathBuf>,

    /// Write rendered configuration here instead of stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            context: None,
            output: None,
            pretty: default_pretty(),
        }
    }
}

impl Settings {
    /// Provider stack, lowest priority first.
    pub fn figment(root: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(root.join(SETTINGS_FILE)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load settings for a project rooted at `root`.
    ///
    /// A missing `kiln.toml` is not an error.
    pub fn load(root: &Path) -> Result<Self> {
        let settings: Settings = Self::figment(root).extract().map_err(Box::new)?;
        debug!(?settings, root = %root.display(), "loaded settings");
        Ok(settings)
    }

    /// Context directory, resolved against `root` when relative.
    pub fn context_dir(&self, root: &Path) -> PathBuf {
        match &self.context {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        unsafe {
            std::env::remove_var("KILN_CONTEXT");
            std::env::remove_var("KILN_OUTPUT");
            std::env::remove_var("KILN_PRETTY");
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.context_dir(dir.path()), dir.path());
    }

    #[test]
    #[serial]
    fn file_overrides_defaults() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"
context = "web"
pretty = false
"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert!(!settings.pretty);
        assert_eq!(settings.context_dir(dir.path()), dir.path().join("web"));
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "output = \"from-file.json\"\n").unwrap();
        unsafe {
            std::env::set_var("KILN_OUTPUT", "from-env.json");
        }

        let settings = Settings::load(dir.path()).unwrap();
        clear_env();
        assert_eq!(settings.output, Some(PathBuf::from("from-env.json")));
    }

    #[test]
    #[serial]
    fn invalid_file_is_reported() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "pretty = \"sometimes\"\n").unwrap();
        assert!(matches!(
            Settings::load(dir.path()),
            Err(crate::ConfigError::Settings(_))
        ));
    }
}
