use std::{env, error::Error, path::PathBuf};

use crate::{config::RequireDepsConfig, RequireDeps};

#[derive(Default)]
pub struct RequireDepsBuilder {
    // All other paths are relative to `root`
    root: Option<PathBuf>,
    policy_file_name: Option<PathBuf>,
    graph_file_name: Option<PathBuf>,
    config: Option<RequireDepsConfig>,
}

impl RequireDepsBuilder {
    /// Project root directory.
    ///
    /// Defaults to the current directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Name of the policy toml file.
    ///
    /// Defaults to `requiredeps.toml`.
    pub fn policy_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.policy_file_name = Some(path.into());
        self
    }

    /// Name of the resolved dependency graph file.
    ///
    /// Defaults to `requiredeps.graph.toml`.
    pub fn graph_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.graph_file_name = Some(path.into());
        self
    }

    /// Overrides loaded from the environment, applied on top of the policy file.
    pub fn config(mut self, config: RequireDepsConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn try_build(self) -> Result<RequireDeps, Box<dyn Error>> {
        let Self {
            root,
            policy_file_name,
            graph_file_name,
            config,
        } = self;
        let root = match root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        let policy_file_name =
            policy_file_name.unwrap_or_else(|| PathBuf::from("requiredeps.toml"));

        let graph_file_name =
            graph_file_name.unwrap_or_else(|| PathBuf::from("requiredeps.graph.toml"));

        Ok(RequireDeps {
            root,
            policy_file_name,
            graph_file_name,
            config: config.unwrap_or_default(),
        })
    }
}
