use std::fmt::{Display, Write};

use thiserror::Error;

use crate::{
    model::{DiagnosticScope, Pattern, Policy},
    requirements::RequirementSet,
    resolver::DependencyResolver,
    validator,
};

/// One or more required dependencies were not found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct PolicyViolation {
    pub message: Option<String>,
    pub missing: Vec<Pattern>,
}

impl PolicyViolation {
    pub fn error_message(pattern: &Pattern) -> String {
        format!("Not found Require Dependency: {}\n", pattern)
    }
}

impl Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(message) = &self.message {
            f.write_str(message)?;
            f.write_char('\n')?;
        }
        for pattern in &self.missing {
            f.write_str(&Self::error_message(pattern))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(PolicyViolation),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn into_result(self) -> Result<(), PolicyViolation> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(violation) => Err(violation),
        }
    }
}

/// Checks a [`Policy`] against the dependencies reported by a resolver.
pub struct PolicyEvaluator<R> {
    resolver: R,
}

impl<R> PolicyEvaluator<R>
where
    R: DependencyResolver,
{
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn evaluate(&self, policy: &Policy) -> anyhow::Result<Verdict> {
        if policy.includes.is_empty() {
            return Ok(Verdict::Pass);
        }

        let mut requirements = RequirementSet::new(&policy.includes);
        if policy.search_transitive {
            let root = self.resolver.resolve_transitive_graph()?;
            validator::validate_tree(&root, &policy.excludes, &mut requirements);
        } else {
            let direct = self.resolver.direct_dependencies()?;
            validator::validate_flat(&direct, &policy.excludes, &mut requirements);
        }

        if requirements.is_satisfied() {
            return Ok(Verdict::Pass);
        }

        let missing = match policy.diagnostics {
            DiagnosticScope::Remaining => requirements.remaining_patterns(),
            DiagnosticScope::Original => requirements.original_patterns(),
        };
        Ok(Verdict::Fail(PolicyViolation {
            message: policy.message.clone(),
            missing: missing.to_vec(),
        }))
    }
}
