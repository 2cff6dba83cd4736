pub mod cli;
pub mod config;
pub mod evaluator;
pub mod matcher;
pub mod model;
pub mod requirements;
pub mod resolver;
pub mod validator;

mod api;

pub use api::{CheckOptions, RequireDeps, RequireDepsBuilder};
pub use evaluator::{PolicyEvaluator, PolicyViolation, Verdict};
