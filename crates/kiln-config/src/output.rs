//! Output location and debug settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::mode::Mode;

/// Directory, relative to the context, that receives build artifacts.
pub const OUTPUT_DIR: &str = "builds";

/// File name of the script bundle.
pub const SCRIPT_BUNDLE: &str = "bundle.js";

/// URL prefix under which artifacts are served.
pub const PUBLIC_PATH: &str = "/builds/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTarget {
    pub path: PathBuf,
    pub filename: String,
    pub public_path: String,
}

impl OutputTarget {
    pub fn for_context(context: &Path) -> Self {
        Self {
            path: context.join(OUTPUT_DIR),
            filename: SCRIPT_BUNDLE.to_string(),
            public_path: PUBLIC_PATH.to_string(),
        }
    }

    /// Public URL of an emitted artifact.
    pub fn public_url(&self, file: &str) -> String {
        format!("{}{}", self.public_path, file)
    }
}

/// Source map style. Serializes as the style name, or `false` when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevTool {
    SourceMap,
    Disabled,
}

impl DevTool {
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_production() {
            DevTool::Disabled
        } else {
            DevTool::SourceMap
        }
    }
}

impl Serialize for DevTool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DevTool::SourceMap => serializer.serialize_str("source-map"),
            DevTool::Disabled => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for DevTool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(DevTool::Disabled),
            Raw::Name(name) if name == "source-map" => Ok(DevTool::SourceMap),
            Raw::Flag(true) => Err(serde::de::Error::custom(
                "devtool must be a source map style or false",
            )),
            Raw::Name(name) => Err(serde::de::Error::custom(format!(
                "unsupported devtool `{name}`"
            ))),
        }
    }
}
