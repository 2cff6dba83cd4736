mod graph_file;

use crate::model::{Coordinate, DependencyNode};

pub use graph_file::GraphFileResolver;

/// Source of an already-resolved dependency graph.
pub trait DependencyResolver {
    /// Root of the whole resolved dependency tree.
    fn resolve_transitive_graph(&self) -> anyhow::Result<DependencyNode>;

    /// The project's immediate dependencies, in declaration order.
    fn direct_dependencies(&self) -> anyhow::Result<Vec<Coordinate>>;
}

impl<T> DependencyResolver for &T
where
    T: DependencyResolver + ?Sized,
{
    fn resolve_transitive_graph(&self) -> anyhow::Result<DependencyNode> {
        T::resolve_transitive_graph(self)
    }

    fn direct_dependencies(&self) -> anyhow::Result<Vec<Coordinate>> {
        T::direct_dependencies(self)
    }
}
