use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::model::{DiagnosticScope, Policy};

/// Policy overrides taken from `REQUIREDEPS_*` environment variables.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RequireDepsConfig {
    pub search_transitive: Option<bool>,
    pub message: Option<String>,
    pub diagnostics: Option<DiagnosticScope>,
}

impl RequireDepsConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            search_transitive: raw_config.policy.transitive,
            message: raw_config.policy.message,
            diagnostics: raw_config.report.diagnostics,
        })
    }

    pub fn apply(&self, policy: &mut Policy) {
        if let Some(search_transitive) = self.search_transitive {
            policy.search_transitive = search_transitive;
        }
        if let Some(message) = &self.message {
            policy.message = Some(message.clone());
        }
        if let Some(diagnostics) = self.diagnostics {
            policy.diagnostics = diagnostics;
        }
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    policy: PolicyConfig,
    #[serde(default)]
    report: ReportConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct PolicyConfig {
    transitive: Option<bool>,
    message: Option<String>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct ReportConfig {
    diagnostics: Option<DiagnosticScope>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("REQUIREDEPS")
                    .separator("_")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}
