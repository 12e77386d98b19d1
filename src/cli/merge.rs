//! Merge command - squash-merge approved, green pull requests

use crate::cli::RepoArgs;
use crate::cli::context::CommandContext;
use clap::Args;
use pr_autopilot::error::Result;
use pr_autopilot::policy::MergePolicy;
use pr_autopilot::run::execute_policy;

/// Arguments for the merge subcommand
#[derive(Args)]
pub struct MergeArgs {
    /// Repository and credentials
    #[command(flatten)]
    pub repo: RepoArgs,
}

/// Run the merge command
pub async fn run_merge(args: MergeArgs) -> Result<()> {
    let ctx = CommandContext::new(&args.repo)?;
    let policy = MergePolicy::new();

    execute_policy(ctx.platform.as_ref(), &policy).await?;
    Ok(())
}
