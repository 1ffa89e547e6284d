//! File-type rules mapping path patterns to loader pipelines.
//!
//! Rules are tried in declaration order and the first match wins. Patterns are
//! kept as source text so the table can be built infallibly; compile them with
//! [`RuleSet::matcher`] to test paths.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::trace;

use crate::asset::{AssetRoute, INLINE_ASSET_LIMIT};
use crate::error::{ConfigError, Result};
use crate::loader::{self, LoaderSpec};
use crate::plugin::STYLESHEET_BUNDLE;

/// Scripts, including JSX.
pub const SCRIPT_PATTERN: &str = r"\.jsx?$";

/// Optional `?v=1.2.3` cache-busting suffix on font and icon URLs.
const VERSION_SUFFIX: &str = r"(\?v=\d+\.\d+\.\d+)?$";

/// Loaders extracted into a separate stylesheet instead of injected at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractSpec {
    pub filename: String,
    /// Used when extraction is disabled, e.g. inside async chunks.
    pub fallback: LoaderSpec,
    #[serde(rename = "use")]
    pub loaders: Vec<LoaderSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleUse {
    Loaders(Vec<LoaderSpec>),
    Extract(ExtractSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression tested against the module path.
    pub test: String,

    /// Restrict the rule to paths under this directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,

    #[serde(flatten)]
    pub uses: RuleUse,
}

impl Rule {
    pub fn loaders(test: impl Into<String>, loaders: Vec<LoaderSpec>) -> Self {
        Self {
            test: test.into(),
            include: None,
            uses: RuleUse::Loaders(loaders),
        }
    }

    pub fn extract(test: impl Into<String>, loaders: Vec<LoaderSpec>) -> Self {
        Self {
            test: test.into(),
            include: None,
            uses: RuleUse::Extract(ExtractSpec {
                filename: STYLESHEET_BUNDLE.to_string(),
                fallback: LoaderSpec::new(loader::STYLE),
                loaders,
            }),
        }
    }

    pub fn with_include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include = Some(dir.into());
        self
    }

    /// Full pipeline in engine order; extract rules lead with their fallback.
    pub fn pipeline(&self) -> Vec<&LoaderSpec> {
        match &self.uses {
            RuleUse::Loaders(loaders) => loaders.iter().collect(),
            RuleUse::Extract(extract) => std::iter::once(&extract.fallback)
                .chain(extract.loaders.iter())
                .collect(),
        }
    }

    /// Stylesheet file this rule extracts into, if any.
    pub fn extract_target(&self) -> Option<&str> {
        match &self.uses {
            RuleUse::Extract(extract) => Some(&extract.filename),
            RuleUse::Loaders(_) => None,
        }
    }

    /// Inline size limit of a url loader in this rule.
    pub fn inline_limit(&self) -> Option<u64> {
        self.pipeline()
            .into_iter()
            .find(|l| l.is(loader::URL))
            .and_then(|l| l.option("limit"))
            .and_then(|v| v.as_u64())
    }

    /// Decide what happens to an asset of `size` bytes handled by this rule.
    ///
    /// Returns `None` for rules that do not produce assets (scripts, styles,
    /// markup). A url loader without a limit always inlines.
    pub fn route(&self, size: u64) -> Option<AssetRoute> {
        let pipeline = self.pipeline();
        if pipeline.iter().any(|l| l.is(loader::URL)) {
            return Some(match self.inline_limit() {
                Some(limit) => AssetRoute::for_size(size, limit),
                None => AssetRoute::Inline,
            });
        }
        if pipeline.iter().any(|l| l.is(loader::FILE)) {
            return Some(AssetRoute::Emit);
        }
        None
    }

    /// Legacy `a!b?x` request string for the whole pipeline.
    pub fn request(&self) -> String {
        loader::render_pipeline(self.pipeline())
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Compile every pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] for the first pattern that fails.
    pub fn matcher(&self) -> Result<RuleMatcher<'_>> {
        let compiled = self
            .rules
            .iter()
            .map(|rule| {
                Regex::new(&rule.test)
                    .map(|re| (re, rule))
                    .map_err(|source| ConfigError::InvalidPattern {
                        pattern: rule.test.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleMatcher { compiled })
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// A rule set with compiled patterns.
pub struct RuleMatcher<'a> {
    compiled: Vec<(Regex, &'a Rule)>,
}

impl<'a> RuleMatcher<'a> {
    fn applies(re: &Regex, rule: &Rule, path: &Path) -> bool {
        match &rule.include {
            Some(include) if !path.starts_with(include) => return false,
            _ => {}
        }
        re.is_match(&path.to_string_lossy())
    }

    /// First rule matching `path`, in declaration order.
    pub fn find(&self, path: impl AsRef<Path>) -> Option<&'a Rule> {
        let path = path.as_ref();
        let found = self
            .compiled
            .iter()
            .find(|(re, rule)| Self::applies(re, rule, path))
            .map(|(_, rule)| *rule);
        trace!(path = %path.display(), matched = ?found.map(|r| r.test.as_str()), "rule lookup");
        found
    }

    /// Every rule matching `path`, in declaration order.
    pub fn find_all(&self, path: impl AsRef<Path>) -> Vec<&'a Rule> {
        let path = path.as_ref();
        self.compiled
            .iter()
            .filter(|(re, rule)| Self::applies(re, rule, path))
            .map(|(_, rule)| *rule)
            .collect()
    }

    /// Sample paths matched by more than one rule.
    ///
    /// The first match still wins at build time; this only flags tables where
    /// a later rule is shadowed for some file type.
    pub fn overlaps<'p>(&self, samples: &[&'p str]) -> Vec<&'p str> {
        samples
            .iter()
            .copied()
            .filter(|sample| self.find_all(sample).len() > 1)
            .collect()
    }
}

/// One file name per file type the default table is meant to handle.
pub const SAMPLE_FILES: &[&str] = &[
    "app.js",
    "view.jsx",
    "main.css",
    "theme.scss",
    "layout.less",
    "page.html",
    "logo.png",
    "photo.JPG",
    "anim.gif",
    "font.woff",
    "font.woff2?v=4.7.0",
    "font.ttf",
    "font.ttf?v=4.7.0",
    "font.eot",
    "icon.svg",
    "icon.svg?v=1.0.0",
];

fn url(mimetype: Option<&str>) -> LoaderSpec {
    let spec = LoaderSpec::new(loader::URL).with_option("limit", INLINE_ASSET_LIMIT);
    match mimetype {
        Some(mime) => spec.with_option("mimetype", mime),
        None => spec,
    }
}

fn css_modules() -> LoaderSpec {
    LoaderSpec::new(loader::CSS).with_option("modules", true)
}

/// The fixed loader table.
pub fn build_rule_set() -> RuleSet {
    RuleSet::new(vec![
        Rule::loaders(
            SCRIPT_PATTERN,
            vec![
                LoaderSpec::new(loader::BABEL)
                    .with_option("babelrc", false)
                    .with_option("presets", json!(["react", "es2015"])),
            ],
        ),
        Rule::extract(r"\.css$", vec![css_modules()]),
        Rule::extract(
            r"\.scss$",
            vec![css_modules(), LoaderSpec::new(loader::SASS)],
        ),
        Rule::extract(
            r"\.less$",
            vec![css_modules(), LoaderSpec::new(loader::LESS)],
        ),
        Rule::loaders(r"\.html$", vec![LoaderSpec::new(loader::HTML)]),
        Rule::loaders(r"(?i)\.(png|gif|jpe?g)$", vec![url(None)]),
        Rule::loaders(
            format!(r"\.(woff|woff2){VERSION_SUFFIX}"),
            vec![url(Some("application/font-woff"))],
        ),
        Rule::loaders(
            format!(r"\.ttf{VERSION_SUFFIX}"),
            vec![url(Some("application/octet-stream"))],
        ),
        Rule::loaders(
            format!(r"\.eot{VERSION_SUFFIX}"),
            vec![LoaderSpec::new(loader::FILE)],
        ),
        Rule::loaders(
            format!(r"\.svg{VERSION_SUFFIX}"),
            vec![url(Some("image/svg+xml"))],
        ),
    ])
}

/// Lint pass run before the main loaders, scoped to `<context>/src`.
pub fn lint_rule(context: &Path) -> Rule {
    Rule::loaders(SCRIPT_PATTERN, vec![LoaderSpec::new(loader::ESLINT)])
        .with_include(context.join("src"))
}
