//! The assembled build configuration.
//!
//! [`assemble`] is the only place the pieces are put together, so ordering
//! rules (plugins, loaders, pre-loaders) live in one function.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::mode::Mode;
use crate::output::{DevTool, OutputTarget};
use crate::plugin::{Plugin, build_plugin_list};
use crate::resolve::ResolveOptions;
use crate::rule::{RuleSet, build_rule_set, lint_rule};

/// Where dependency discovery starts, relative to the context directory.
pub const DEFAULT_ENTRY: &str = "./src";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOptions {
    /// Rules run before `loaders`, e.g. linting.
    pub pre_loaders: RuleSet,
    pub loaders: RuleSet,
}

/// Rendered, not parsed: the mode is not part of the engine's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfiguration {
    /// Directory relative entries and rule includes are resolved against.
    pub context: PathBuf,
    #[serde(skip)]
    pub mode: Mode,
    pub entry: Vec<String>,
    pub output: OutputTarget,
    pub debug: bool,
    pub devtool: DevTool,
    pub plugins: Vec<Plugin>,
    pub resolve: ResolveOptions,
    pub module: ModuleOptions,
}

/// Assemble the full configuration for `mode`, rooted at `context`.
///
/// ```
/// use std::path::Path;
/// use kiln_config::{assemble, Mode};
///
/// let config = assemble(Mode::Production, Path::new("/project"));
/// assert!(!config.debug);
/// assert_eq!(config.output.public_path, "/builds/");
/// ```
pub fn assemble(mode: Mode, context: &Path) -> BuildConfiguration {
    let config = BuildConfiguration {
        context: context.to_path_buf(),
        mode,
        entry: vec![DEFAULT_ENTRY.to_string()],
        output: OutputTarget::for_context(context),
        debug: !mode.is_production(),
        devtool: DevTool::for_mode(mode),
        plugins: build_plugin_list(mode),
        resolve: ResolveOptions::default(),
        module: ModuleOptions {
            pre_loaders: RuleSet::new(vec![lint_rule(context)]),
            loaders: build_rule_set(),
        },
    };

    info!(
        %mode,
        context = %context.display(),
        plugins = config.plugins.len(),
        rules = config.module.loaders.len(),
        "assembled build configuration"
    );
    config
}

impl BuildConfiguration {
    /// Entry points joined onto the context directory.
    pub fn entry_paths(&self) -> Vec<PathBuf> {
        self.entry.iter().map(|e| self.context.join(e)).collect()
    }

    /// Every rule include directory, pre-loaders first.
    pub fn include_dirs(&self) -> Vec<&Path> {
        self.module
            .pre_loaders
            .iter()
            .chain(self.module.loaders.iter())
            .filter_map(|rule| rule.include.as_deref())
            .collect()
    }

    /// File name passed to the stylesheet extraction plugin, if registered.
    pub fn extracted_stylesheet(&self) -> Option<&str> {
        self.plugins.iter().find_map(|plugin| match plugin {
            Plugin::ExtractText(options) => Some(options.filename.as_str()),
            _ => None,
        })
    }

    /// Render to the JSON object handed to the engine.
    pub fn to_value(&self) -> Result<Value> {
        let value = serde_json::to_value(self)?;
        debug!(mode = %self.mode, "rendered configuration");
        Ok(value)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
