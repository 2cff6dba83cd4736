use std::{error::Error, path::PathBuf};

use crate::{
    cli::command_handlers::{do_check, do_init},
    config::RequireDepsConfig,
    model::{DiagnosticScope, Pattern, Policy},
};

mod builder;

pub use builder::RequireDepsBuilder;

pub struct RequireDeps {
    root: PathBuf,
    policy_file_name: PathBuf,
    graph_file_name: PathBuf,
    config: RequireDepsConfig,
}

/// Per-invocation adjustments applied on top of the policy file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Appended to the policy's includes.
    pub includes: Vec<Pattern>,
    /// Appended to the policy's excludes.
    pub excludes: Vec<Pattern>,
    pub direct_only: bool,
    pub message: Option<String>,
    pub report_original: bool,
}

impl CheckOptions {
    pub fn apply(&self, policy: &mut Policy) {
        policy.includes.extend(self.includes.iter().cloned());
        policy.excludes.extend(self.excludes.iter().cloned());
        if self.direct_only {
            policy.search_transitive = false;
        }
        if let Some(message) = &self.message {
            policy.message = Some(message.clone());
        }
        if self.report_original {
            policy.diagnostics = DiagnosticScope::Original;
        }
    }
}

impl RequireDeps {
    pub fn builder() -> RequireDepsBuilder {
        RequireDepsBuilder::default()
    }

    /// Checks the resolved graph against the policy file
    pub fn check(&self, options: &CheckOptions) -> Result<(), Box<dyn Error>> {
        do_check(
            &self.root,
            &self.policy_file_name,
            &self.graph_file_name,
            &self.config,
            options,
        )
    }

    /// Creates a starter policy file
    pub fn init(&self, force: bool) -> Result<(), Box<dyn Error>> {
        do_init(&self.root, &self.policy_file_name, force)
    }
}
