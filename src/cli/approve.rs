//! Approve command - approve allow-listed, green pull requests

use crate::cli::RepoArgs;
use crate::cli::context::CommandContext;
use clap::Args;
use pr_autopilot::config::load_approval_config;
use pr_autopilot::error::Result;
use pr_autopilot::policy::ApprovalPolicy;
use pr_autopilot::run::execute_policy;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the approve subcommand
#[derive(Args)]
pub struct ApproveArgs {
    /// Repository and credentials
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Path to the JSON file naming authorized authors
    #[arg(long, default_value = ".github/auto-approve-config.json")]
    pub config: PathBuf,
}

/// Run the approve command
pub async fn run_approve(args: ApproveArgs) -> Result<()> {
    let config = load_approval_config(&args.config)?;
    info!(authorized_users = ?config.authorized_users, "loaded approval config");

    let ctx = CommandContext::new(&args.repo)?;
    let policy = ApprovalPolicy::from(config);

    execute_policy(ctx.platform.as_ref(), &policy).await?;
    Ok(())
}
