//! Shared command context for CLI commands

use crate::cli::RepoArgs;
use pr_autopilot::error::{Error, Result};
use pr_autopilot::platform::{GitHubService, PlatformService};

/// Shared setup for subcommands that talk to the platform
pub struct CommandContext {
    /// Platform service scoped to the configured repository
    pub platform: Box<dyn PlatformService>,
}

impl CommandContext {
    /// Build the platform service from repository and credential arguments
    pub fn new(args: &RepoArgs) -> Result<Self> {
        let (owner, repo) = args.repo.split_once('/').ok_or_else(|| {
            Error::Config(format!(
                "invalid repository {:?}, expected owner/name",
                args.repo
            ))
        })?;

        let platform = GitHubService::new(
            &args.token,
            owner.to_string(),
            repo.to_string(),
            args.github_host.clone(),
        )?;

        Ok(Self {
            platform: Box::new(platform),
        })
    }
}
