use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::model::{graph::GraphFile, Coordinate, DependencyNode};

use super::DependencyResolver;

/// Reads the resolved graph that the build tool wrote to disk.
pub struct GraphFileResolver {
    path: PathBuf,
}

impl GraphFileResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<GraphFile> {
        debug!("Reading resolved graph from {}", self.path.display());
        GraphFile::from_file(&self.path)
            .with_context(|| format!("Could not read graph file {}", self.path.display()))
    }
}

impl DependencyResolver for GraphFileResolver {
    fn resolve_transitive_graph(&self) -> anyhow::Result<DependencyNode> {
        let tree = self.load()?.to_tree()?;
        debug!(
            "Resolved graph rooted at {} with {} direct dependencies",
            tree.coordinate,
            tree.children.len()
        );
        Ok(tree)
    }

    fn direct_dependencies(&self) -> anyhow::Result<Vec<Coordinate>> {
        let direct = self.load()?.direct_dependencies();
        debug!("Found {} direct dependencies", direct.len());
        Ok(direct)
    }
}
