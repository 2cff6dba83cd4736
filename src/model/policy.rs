use std::path::Path;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::model::{ParseError, Pattern};

/// Which include patterns a failed run reports as missing.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum DiagnosticScope {
    /// Only the patterns still unsatisfied after traversal.
    #[default]
    #[serde(rename = "remaining")]
    Remaining,
    /// Every configured include, whether it was matched or not.
    #[serde(rename = "original")]
    Original,
}

/// A required-dependency policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(default = "default_search_transitive")]
    pub search_transitive: bool,
    #[serde(default)]
    pub diagnostics: DiagnosticScope,
    #[serde(default)]
    pub includes: Vec<Pattern>,
    #[serde(default)]
    pub excludes: Vec<Pattern>,
}

fn default_search_transitive() -> bool {
    true
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            message: None,
            search_transitive: default_search_transitive(),
            diagnostics: DiagnosticScope::default(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }
}

impl Policy {
    pub fn from_file(path: &Path) -> Result<Policy, ParseError> {
        debug!("Attempting to read policy from {}", path.display());
        let contents = std::fs::read_to_string(path)?;

        let policy = Policy::from_toml_str(&contents);
        if let Err(err) = &policy {
            error!("Could not build a valid policy from {} due to err {err}", path.display())
        }
        policy
    }

    pub fn from_toml_str(data: &str) -> Result<Policy, ParseError> {
        toml::from_str(data).map_err(Into::into)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
