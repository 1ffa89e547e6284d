//! Pluggable config validation strategies
//!
//! The assembler cannot fail, but a hand-edited or extended configuration can
//! violate the ordering and naming invariants the engine relies on. Schema
//! validation checks those without touching disk; filesystem validation also
//! checks that referenced paths exist.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::BuildConfiguration;
use crate::error::{ConfigError, Result};
use crate::plugin::check_plugin_order;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use kiln_config::{assemble, ConfigValidator, Mode, SchemaValidator};
///
/// let config = assemble(Mode::Production, Path::new("."));
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        if config.entry.iter().all(|e| e.trim().is_empty()) {
            return Err(ConfigError::NoEntries);
        }

        // Patterns compile
        config.module.pre_loaders.matcher()?;
        config.module.loaders.matcher()?;

        check_plugin_order(&config.plugins, config.mode)?;

        // Every extracting rule must feed the registered extraction plugin
        let extracted = config.extracted_stylesheet();
        for rule in &config.module.loaders {
            let Some(target) = rule.extract_target() else {
                continue;
            };
            if extracted != Some(target) {
                return Err(ConfigError::schema(
                    format!(
                        "rule `{}` extracts into `{target}` but the extraction plugin writes {}",
                        rule.test,
                        extracted.map_or_else(|| "nothing".to_string(), |f| format!("`{f}`"))
                    ),
                    "All stylesheet rules must extract into the same bundle",
                ));
            }
            if rule.pipeline().len() < 2 {
                return Err(ConfigError::schema(
                    format!("rule `{}` has an extraction pipeline with no loaders", rule.test),
                    "Extraction needs at least a style fallback and a css loader",
                ));
            }
        }

        if let Some(ext) = config.resolve.duplicate_extension() {
            return Err(ConfigError::schema(
                format!("resolve extension `{ext}` is listed more than once"),
                "Remove the duplicate from resolve.extensions",
            ));
        }

        debug!(mode = %config.mode, "schema validation passed");
        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that entry points and rule include
/// directories exist under the root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.entry_paths() {
            let path = self.root.join(entry);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for dir in config.include_dirs() {
            let path = self.root.join(dir);
            if !path.is_dir() {
                return Err(ConfigError::IncludeNotFound { path });
            }
        }

        debug!(root = %self.root.display(), "filesystem validation passed");
        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoaderSpec;
    use crate::mode::Mode;
    use crate::plugin::{ExtractTextOptions, Plugin};
    use crate::rule::Rule;
    use crate::{assemble, RuleSet};
    use std::fs;
    use tempfile::TempDir;

    fn production() -> BuildConfiguration {
        assemble(Mode::Production, Path::new("/project"))
    }

    #[test]
    fn assembled_configs_pass() {
        for mode in [Mode::Development, Mode::Production] {
            validate_schema(&assemble(mode, Path::new("/project"))).unwrap();
        }
    }

    #[test]
    fn rejects_empty_entries() {
        let mut config = production();
        config.entry = vec!["  ".to_string()];
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::NoEntries)
        ));
    }

    #[test]
    fn rejects_bad_pattern() {
        let mut config = production();
        config.module.loaders = RuleSet::new(vec![Rule::loaders("(", vec![])]);
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_extract_target() {
        let mut config = production();
        config.plugins[2] = Plugin::ExtractText(ExtractTextOptions {
            filename: "styles.css".to_string(),
        });
        let err = validate_schema(&config).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaValidation { .. }));
        assert!(err.to_string().contains("bundle.css"));
    }

    #[test]
    fn rejects_production_plugins_out_of_order() {
        let mut config = production();
        let define = config.plugins.pop().unwrap();
        config.plugins.insert(4, define);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_duplicate_extensions() {
        let mut config = production();
        config.resolve.extensions.push(".js".to_string());
        let err = validate_schema(&config).unwrap_err();
        assert!(err.hint().is_some());
    }

    #[test]
    fn rejects_bare_extract_pipeline() {
        let mut config = production();
        let mut rules = config.module.loaders.rules().to_vec();
        rules[1] = Rule::extract(r"\.css$", vec![]);
        config.module.loaders = RuleSet::new(rules);
        assert!(validate_schema(&config).is_err());

        // a populated extract rule is fine
        let mut rules = config.module.loaders.rules().to_vec();
        rules[1] = Rule::extract(r"\.css$", vec![LoaderSpec::new("css")]);
        config.module.loaders = RuleSet::new(rules);
        validate_schema(&config).unwrap();
    }

    #[test]
    fn fs_validator_checks_entry_and_include() {
        let dir = TempDir::new().unwrap();
        let config = assemble(Mode::Development, dir.path());

        let err = validate_fs(&config, "/").unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound { .. }));

        fs::create_dir_all(dir.path().join("src")).unwrap();
        validate_fs(&config, "/").unwrap();
    }

    #[test]
    fn fs_validator_requires_include_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = assemble(Mode::Development, dir.path());
        fs::create_dir_all(dir.path().join("src")).unwrap();
        config.module.pre_loaders = RuleSet::new(vec![
            crate::lint_rule(&dir.path().join("missing")),
        ]);
        assert!(matches!(
            FsValidator::new("/").validate(&config),
            Err(ConfigError::IncludeNotFound { .. })
        ));
    }
}
