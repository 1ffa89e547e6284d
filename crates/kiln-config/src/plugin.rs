//! Engine plugins and the ordered plugin list.
//!
//! Plugins register with the engine in list order, and some production passes
//! depend on earlier ones (cleanup must run before deduplication). The order is
//! fixed here by [`build_plugin_list`] and checked by [`check_plugin_order`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::asset::MIN_CHUNK_SIZE;
use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// File name every extracted stylesheet is written to.
pub const STYLESHEET_BUNDLE: &str = "bundle.css";

/// Modules matching this pattern are never bundled.
pub const IGNORED_MODULES: &str = "vertx";

/// Output chunk that receives hoisted common dependencies.
pub const COMMONS_CHUNK: &str = "main";

/// How many child chunks must share a dependency before it is hoisted.
pub const COMMONS_MIN_CHUNKS: u32 = 2;

/// Glob cleaned out of the output directory before a production build.
pub const CLEAN_GLOB: &str = "builds/*";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreOptions {
    pub resource_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractTextOptions {
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonsChunkOptions {
    pub name: String,
    /// Look for shared dependencies across all child chunks.
    pub children: bool,
    pub min_chunks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanOptions {
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinChunkSizeOptions {
    pub min_chunk_size: u64,
}

impl MinChunkSizeOptions {
    pub fn keeps(&self, size: u64) -> bool {
        crate::asset::keeps_chunk(size, self.min_chunk_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressOptions {
    pub warnings: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinifyOptions {
    pub mangle: bool,
    pub compress: CompressOptions,
}

/// Compile-time constants substituted into the output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefineOptions {
    #[serde(flatten)]
    pub definitions: IndexMap<String, Value>,
}

impl DefineOptions {
    /// Flags that gate development-only code, plus the transpiler environment.
    pub fn for_mode(mode: Mode) -> Self {
        let debug_flag = Value::Bool(!mode.is_production());
        let mut definitions = IndexMap::new();
        definitions.insert("__SERVER__".to_string(), debug_flag.clone());
        definitions.insert("__DEVELOPMENT__".to_string(), debug_flag.clone());
        definitions.insert("__DEVTOOLS__".to_string(), debug_flag);

        // Values are source text, so strings carry their own quotes.
        let babel_env = Value::String(Value::String(mode.as_str().to_string()).to_string());
        let mut process_env = serde_json::Map::new();
        process_env.insert("BABEL_ENV".to_string(), babel_env);
        definitions.insert("process.env".to_string(), Value::Object(process_env));

        Self { definitions }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.definitions.get(key)
    }
}

/// One engine plugin with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    Ignore(IgnoreOptions),
    BowerResolve,
    ExtractText(ExtractTextOptions),
    CommonsChunk(CommonsChunkOptions),
    Clean(CleanOptions),
    Dedupe,
    OccurrenceOrder,
    MinChunkSize(MinChunkSizeOptions),
    Minify(MinifyOptions),
    Define(DefineOptions),
}

/// Option-free discriminant of [`Plugin`], used for ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Ignore,
    BowerResolve,
    ExtractText,
    CommonsChunk,
    Clean,
    Dedupe,
    OccurrenceOrder,
    MinChunkSize,
    Minify,
    Define,
}

/// Plugins present in every build, in registration order.
pub const BASE_PLUGINS: [PluginKind; 4] = [
    PluginKind::Ignore,
    PluginKind::BowerResolve,
    PluginKind::ExtractText,
    PluginKind::CommonsChunk,
];

/// Plugins appended for production builds, in registration order.
pub const PRODUCTION_PLUGINS: [PluginKind; 6] = [
    PluginKind::Clean,
    PluginKind::Dedupe,
    PluginKind::OccurrenceOrder,
    PluginKind::MinChunkSize,
    PluginKind::Minify,
    PluginKind::Define,
];

impl Plugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::Ignore(_) => PluginKind::Ignore,
            Plugin::BowerResolve => PluginKind::BowerResolve,
            Plugin::ExtractText(_) => PluginKind::ExtractText,
            Plugin::CommonsChunk(_) => PluginKind::CommonsChunk,
            Plugin::Clean(_) => PluginKind::Clean,
            Plugin::Dedupe => PluginKind::Dedupe,
            Plugin::OccurrenceOrder => PluginKind::OccurrenceOrder,
            Plugin::MinChunkSize(_) => PluginKind::MinChunkSize,
            Plugin::Minify(_) => PluginKind::Minify,
            Plugin::Define(_) => PluginKind::Define,
        }
    }

    pub fn is_production_only(&self) -> bool {
        PRODUCTION_PLUGINS.contains(&self.kind())
    }
}

fn base_plugins() -> Vec<Plugin> {
    vec![
        Plugin::Ignore(IgnoreOptions {
            resource_pattern: IGNORED_MODULES.to_string(),
        }),
        Plugin::BowerResolve,
        Plugin::ExtractText(ExtractTextOptions {
            filename: STYLESHEET_BUNDLE.to_string(),
        }),
        Plugin::CommonsChunk(CommonsChunkOptions {
            name: COMMONS_CHUNK.to_string(),
            children: true,
            min_chunks: COMMONS_MIN_CHUNKS,
        }),
    ]
}

fn production_plugins(mode: Mode) -> Vec<Plugin> {
    vec![
        Plugin::Clean(CleanOptions {
            paths: vec![CLEAN_GLOB.to_string()],
        }),
        Plugin::Dedupe,
        Plugin::OccurrenceOrder,
        Plugin::MinChunkSize(MinChunkSizeOptions {
            min_chunk_size: MIN_CHUNK_SIZE,
        }),
        Plugin::Minify(MinifyOptions {
            mangle: true,
            compress: CompressOptions { warnings: false },
        }),
        Plugin::Define(DefineOptions::for_mode(mode)),
    ]
}

/// Build the ordered plugin list for `mode`.
///
/// ```
/// use kiln_config::{build_plugin_list, Mode};
///
/// assert_eq!(build_plugin_list(Mode::Development).len(), 4);
/// assert_eq!(build_plugin_list(Mode::Production).len(), 10);
/// ```
pub fn build_plugin_list(mode: Mode) -> Vec<Plugin> {
    let mut plugins = base_plugins();
    if mode.is_production() {
        plugins.extend(production_plugins(mode));
    }
    debug!(%mode, count = plugins.len(), "built plugin list");
    plugins
}

/// Expected plugin kinds for `mode`, in order.
pub fn expected_kinds(mode: Mode) -> Vec<PluginKind> {
    let mut kinds = BASE_PLUGINS.to_vec();
    if mode.is_production() {
        kinds.extend(PRODUCTION_PLUGINS);
    }
    kinds
}

/// Verify that `plugins` has exactly the kinds and order required for `mode`.
pub fn check_plugin_order(plugins: &[Plugin], mode: Mode) -> Result<()> {
    let actual: Vec<PluginKind> = plugins.iter().map(Plugin::kind).collect();
    let expected = expected_kinds(mode);
    if actual == expected {
        return Ok(());
    }

    let position = actual
        .iter()
        .zip(&expected)
        .position(|(a, e)| a != e)
        .unwrap_or_else(|| actual.len().min(expected.len()));

    Err(ConfigError::schema(
        format!(
            "plugin list for {mode} build diverges at position {position}: expected {:?}, found {:?}",
            expected.get(position),
            actual.get(position)
        ),
        "Build plugin lists with build_plugin_list instead of editing them by hand",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kinds(plugins: &[Plugin]) -> Vec<PluginKind> {
        plugins.iter().map(Plugin::kind).collect()
    }

    #[test]
    fn development_has_no_production_plugins() {
        let plugins = build_plugin_list(Mode::Development);
        assert_eq!(kinds(&plugins), BASE_PLUGINS.to_vec());
        assert!(plugins.iter().all(|p| !p.is_production_only()));
    }

    #[test]
    fn production_appends_in_fixed_order() {
        let plugins = build_plugin_list(Mode::Production);
        assert_eq!(&kinds(&plugins)[..4], &BASE_PLUGINS);
        assert_eq!(&kinds(&plugins)[4..], &PRODUCTION_PLUGINS);
    }

    #[test]
    fn base_plugin_options() {
        let plugins = build_plugin_list(Mode::Development);
        assert_eq!(
            plugins[2],
            Plugin::ExtractText(ExtractTextOptions {
                filename: "bundle.css".to_string()
            })
        );
        let Plugin::CommonsChunk(commons) = &plugins[3] else {
            panic!("expected commons chunk plugin, got {:?}", plugins[3]);
        };
        assert_eq!(commons.name, "main");
        assert!(commons.children);
        assert_eq!(commons.min_chunks, 2);
    }

    #[test]
    fn define_bakes_production_flags() {
        let define = DefineOptions::for_mode(Mode::Production);
        assert_eq!(define.get("__SERVER__"), Some(&json!(false)));
        assert_eq!(define.get("__DEVELOPMENT__"), Some(&json!(false)));
        assert_eq!(define.get("__DEVTOOLS__"), Some(&json!(false)));
        assert_eq!(
            define.get("process.env"),
            Some(&json!({ "BABEL_ENV": "\"production\"" }))
        );
    }

    #[test]
    fn min_chunk_size_filter() {
        let plugins = build_plugin_list(Mode::Production);
        let Some(Plugin::MinChunkSize(filter)) = plugins
            .iter()
            .find(|p| p.kind() == PluginKind::MinChunkSize)
        else {
            panic!("production list has no min chunk size filter");
        };
        assert_eq!(filter.min_chunk_size, 51_200);
        assert!(!filter.keeps(51_199));
        assert!(filter.keeps(51_200));
    }

    #[test]
    fn order_check_accepts_built_lists() {
        for mode in [Mode::Development, Mode::Production] {
            check_plugin_order(&build_plugin_list(mode), mode).unwrap();
        }
    }

    #[test]
    fn order_check_rejects_swapped_production_plugins() {
        let mut plugins = build_plugin_list(Mode::Production);
        plugins.swap(4, 5); // dedupe before clean
        assert!(matches!(
            check_plugin_order(&plugins, Mode::Production),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn order_check_rejects_production_plugins_in_development() {
        let plugins = build_plugin_list(Mode::Production);
        assert!(check_plugin_order(&plugins, Mode::Development).is_err());
    }

    #[test]
    fn serializes_tagged() {
        assert_eq!(
            serde_json::to_value(Plugin::Dedupe).unwrap(),
            json!({ "name": "dedupe" })
        );
        assert_eq!(
            serde_json::to_value(Plugin::MinChunkSize(MinChunkSizeOptions {
                min_chunk_size: 51_200
            }))
            .unwrap(),
            json!({ "name": "min-chunk-size", "options": { "minChunkSize": 51200 } })
        );
    }
}
