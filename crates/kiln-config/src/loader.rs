//! Structured loader records.
//!
//! A loader pipeline is an ordered list of [`LoaderSpec`]s. The engine applies
//! them right to left, so the last entry sees the raw file first.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BABEL: &str = "babel";
pub const STYLE: &str = "style";
pub const CSS: &str = "css";
pub const SASS: &str = "sass";
pub const LESS: &str = "less";
pub const HTML: &str = "html";
pub const URL: &str = "url";
pub const FILE: &str = "file";
pub const ESLINT: &str = "eslint";

/// One named transformation plus its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSpec {
    #[serde(rename = "loader")]
    pub name: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl LoaderSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Render as a legacy `name?query` request string.
    ///
    /// `true` flags render bare, arrays repeat the key with a `[]` suffix.
    ///
    /// ```
    /// use kiln_config::LoaderSpec;
    ///
    /// let url = LoaderSpec::new("url")
    ///     .with_option("limit", 10_000)
    ///     .with_option("mimetype", "image/svg+xml");
    /// assert_eq!(url.to_request(), "url?limit=10000&mimetype=image/svg+xml");
    ///
    /// let css = LoaderSpec::new("css").with_option("modules", true);
    /// assert_eq!(css.to_request(), "css?modules");
    /// ```
    pub fn to_request(&self) -> String {
        if self.options.is_empty() {
            return self.name.clone();
        }

        let mut params = Vec::with_capacity(self.options.len());
        for (key, value) in &self.options {
            match value {
                Value::Bool(true) => params.push(key.clone()),
                Value::Array(items) => {
                    for item in items {
                        params.push(format!("{key}[]={}", scalar(item)));
                    }
                }
                other => params.push(format!("{key}={}", scalar(other))),
            }
        }

        format!("{}?{}", self.name, params.join("&"))
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a whole pipeline as `a!b?x!c`.
pub fn render_pipeline<'a>(loaders: impl IntoIterator<Item = &'a LoaderSpec>) -> String {
    loaders
        .into_iter()
        .map(LoaderSpec::to_request)
        .collect::<Vec<_>>()
        .join("!")
}
