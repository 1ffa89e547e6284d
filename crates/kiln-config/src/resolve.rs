//! Extension resolution for imports that omit a file extension.

use serde::{Deserialize, Serialize};

/// Suffixes tried in order; the leading empty suffix keeps explicit extensions first.
pub const DEFAULT_EXTENSIONS: [&str; 7] = ["", ".webpack.js", ".web.js", ".js", ".css", ".scss", ".less"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ResolveOptions {
    /// Paths the engine tries for `request`, in order.
    ///
    /// ```
    /// use kiln_config::ResolveOptions;
    ///
    /// let candidates = ResolveOptions::default().candidates("./theme");
    /// assert_eq!(candidates[0], "./theme");
    /// assert_eq!(candidates[3], "./theme.js");
    /// ```
    pub fn candidates(&self, request: &str) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!("{request}{ext}"))
            .collect()
    }

    /// First extension listed more than once, if any.
    pub fn duplicate_extension(&self) -> Option<&str> {
        self.extensions
            .iter()
            .enumerate()
            .find(|(i, ext)| self.extensions[..*i].contains(ext))
            .map(|(_, ext)| ext.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order() {
        let resolve = ResolveOptions::default();
        assert_eq!(
            resolve.candidates("./app"),
            vec![
                "./app",
                "./app.webpack.js",
                "./app.web.js",
                "./app.js",
                "./app.css",
                "./app.scss",
                "./app.less",
            ]
        );
        assert!(resolve.duplicate_extension().is_none());
    }

    #[test]
    fn detects_duplicates() {
        let resolve = ResolveOptions {
            extensions: vec![".js".into(), ".css".into(), ".js".into()],
        };
        assert_eq!(resolve.duplicate_extension(), Some(".js"));
    }
}
