use std::collections::HashSet;

use crate::{
    matcher,
    model::{Coordinate, DependencyNode, Pattern},
    requirements::RequirementSet,
};

/// Walks `root` depth first, reconciling each accepted node, and returns the
/// number of nodes reconciled.
///
/// A node matching an exclude pattern is skipped together with its whole
/// subtree. The walk stops as soon as every requirement is satisfied. A node
/// shared by several parents is walked once; a second visit could not
/// satisfy anything new. Recursion depth is the depth of the resolved tree,
/// which the resolver guarantees to be acyclic.
pub fn validate_tree(
    root: &DependencyNode,
    excludes: &[Pattern],
    requirements: &mut RequirementSet,
) -> usize {
    fn go(
        node: &DependencyNode,
        excludes: &[Pattern],
        requirements: &mut RequirementSet,
        walked: &mut HashSet<*const DependencyNode>,
    ) -> usize {
        if !walked.insert(node as *const DependencyNode) {
            return 0;
        }
        if matcher::matches_any(&node.coordinate, excludes) {
            return 0;
        }
        requirements.reconcile(&node.coordinate);

        let mut reconciled = 1;
        for child in &node.children {
            if requirements.is_satisfied() {
                break;
            }
            reconciled += go(child, excludes, requirements, walked);
        }
        reconciled
    }

    go(root, excludes, requirements, &mut HashSet::new())
}

/// Reconciles each non-excluded coordinate in order.
pub fn validate_flat(
    coordinates: &[Coordinate],
    excludes: &[Pattern],
    requirements: &mut RequirementSet,
) {
    for coordinate in coordinates {
        if requirements.is_satisfied() {
            break;
        }
        if matcher::matches_any(coordinate, excludes) {
            continue;
        }
        requirements.reconcile(coordinate);
    }
}
