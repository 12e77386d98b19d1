//! CLI surface for pr-autopilot
//!
//! Both subcommands are designed to run unattended inside a CI job: the
//! repository and token default to the environment GitHub Actions provides.

pub mod approve;
pub mod context;
pub mod merge;

use clap::{Args, Parser, Subcommand};
use pr_autopilot::error::Result;

/// Automation over one repository's open pull requests
#[derive(Parser)]
#[command(name = "pr-autopilot", version, about)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Approve open pull requests that satisfy the approval policy
    Approve(approve::ApproveArgs),
    /// Squash-merge open pull requests that satisfy the merge policy
    Merge(merge::MergeArgs),
}

/// Repository and credentials shared by both subcommands
#[derive(Args)]
pub struct RepoArgs {
    /// Repository in "owner/name" form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub Enterprise host (defaults to github.com)
    #[arg(long)]
    pub github_host: Option<String>,
}

impl Cli {
    /// Dispatch to the selected subcommand
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Approve(args) => approve::run_approve(args).await,
            Commands::Merge(args) => merge::run_merge(args).await,
        }
    }
}
