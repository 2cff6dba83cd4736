use log::{debug, info, warn};

use crate::{
    api::CheckOptions,
    config::RequireDepsConfig,
    evaluator::PolicyEvaluator,
    model::Policy,
    resolver::GraphFileResolver,
};
use std::{error::Error, path::Path};

/// Handler to check command
/// Loads the policy, layers environment and command line overrides on top,
/// then evaluates it against the resolved graph file
pub fn do_check(
    root: &Path,
    policy_file_name: &Path,
    graph_file_name: &Path,
    config: &RequireDepsConfig,
    options: &CheckOptions,
) -> Result<(), Box<dyn Error>> {
    let mut policy = load_policy(root, policy_file_name)?;
    config.apply(&mut policy);
    options.apply(&mut policy);
    debug!("Effective policy: {:?}", policy);

    let resolver = GraphFileResolver::new(root.join(graph_file_name));
    info!(
        "Checking {} required dependencies against {} ({})",
        policy.includes.len(),
        resolver.path().display(),
        if policy.search_transitive {
            "transitive"
        } else {
            "direct only"
        }
    );

    let verdict = PolicyEvaluator::new(&resolver).evaluate(&policy)?;
    verdict.into_result()?;

    info!("All required dependencies found");
    Ok(())
}

/// Handler to init command
pub fn do_init(root: &Path, policy_file_name: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    let policy_file_path = root.join(policy_file_name);
    if policy_file_path.exists() && !force {
        return Err(format!("File already exists: {}", policy_file_path.display()).into());
    }

    std::fs::write(&policy_file_path, Policy::default().to_toml_string()?)?;
    info!("Wrote policy file to {}", policy_file_path.display());
    Ok(())
}

fn load_policy(root: &Path, policy_file_name: &Path) -> Result<Policy, Box<dyn Error>> {
    let policy_file_path = root.join(policy_file_name);
    if !policy_file_path.exists() {
        warn!(
            "Policy file {} not found, using an empty policy",
            policy_file_path.display()
        );
        return Ok(Policy::default());
    }

    Ok(Policy::from_file(&policy_file_path)?)
}
