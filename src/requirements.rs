use crate::{
    matcher,
    model::{Coordinate, Pattern},
};

/// Include patterns that still have to be found during one validation run.
///
/// A pattern leaves the set the first time a coordinate satisfies it and is
/// never added back.
#[derive(Debug, Clone)]
pub struct RequirementSet {
    original: Vec<Pattern>,
    remaining: Vec<Pattern>,
}

impl RequirementSet {
    pub fn new(patterns: &[Pattern]) -> Self {
        RequirementSet {
            original: patterns.to_vec(),
            remaining: patterns.to_vec(),
        }
    }

    /// Drops every remaining pattern satisfied by `coordinate`.
    pub fn reconcile(&mut self, coordinate: &Coordinate) {
        self.remaining
            .retain(|pattern| !matcher::matches(coordinate, pattern));
    }

    pub fn is_satisfied(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn original_patterns(&self) -> &[Pattern] {
        &self.original
    }

    pub fn remaining_patterns(&self) -> &[Pattern] {
        &self.remaining
    }
}
