use clap::Parser;

/// Verifies that a resolved dependency graph contains every required dependency.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
    /// Project root directory; other paths are relative to it
    #[clap(long)]
    pub root: Option<String>,
    #[clap(short, long, default_value = "requiredeps.toml")]
    pub policy_file: String,
    #[clap(short, long, default_value = "requiredeps.graph.toml")]
    pub graph_file: String,
}

#[derive(Debug, Parser)]
pub enum Command {
    ///Checks the resolved dependency graph against the policy file
    Check {
        /// Only look at direct dependencies
        #[clap(long)]
        direct: bool,
        /// Additional required dependency pattern, `group[:artifact[:version]]`
        #[clap(short, long = "include")]
        includes: Vec<String>,
        /// Additional excluded dependency pattern, `group[:artifact[:version]]`
        #[clap(short, long = "exclude")]
        excludes: Vec<String>,
        /// Message printed before the list of missing dependencies
        #[clap(short, long)]
        message: Option<String>,
        /// Report every configured include instead of only the unmatched ones
        #[clap(long)]
        report_original: bool,
    },
    ///Creates a starter policy file
    Init {
        /// Overwrite an existing policy file
        #[clap(long)]
        force: bool,
    },
}
