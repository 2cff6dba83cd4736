use std::{error::Error, process};

use clap::Parser;
use requiredeps::{
    cli::args::{CliArgs, Command},
    config::RequireDepsConfig,
    model::Pattern,
    CheckOptions, RequireDeps,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(e) = run() {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = CliArgs::parse();

    let config = RequireDepsConfig::load()?;

    let mut builder = RequireDeps::builder()
        .policy_file_name(&cli_args.policy_file)
        .graph_file_name(&cli_args.graph_file)
        .config(config);
    if let Some(root) = &cli_args.root {
        builder = builder.root(root);
    }
    let requiredeps = builder.try_build()?;

    match cli_args.cmd {
        Command::Check {
            direct,
            includes,
            excludes,
            message,
            report_original,
        } => requiredeps.check(&CheckOptions {
            includes: includes.into_iter().map(Pattern::from).collect(),
            excludes: excludes.into_iter().map(Pattern::from).collect(),
            direct_only: direct,
            message,
            report_original,
        }),
        Command::Init { force } => requiredeps.init(force),
    }
}
