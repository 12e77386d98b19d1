//! Policy execution - effectful operations
//!
//! This module contains the batch loop that applies a policy to every open
//! pull request. Reads happen through the platform service, decisions come
//! from the pure policy code, and every outcome is logged per pull request.
//!
//! Error discipline: failures of the listing, check, status, and review
//! calls propagate and terminate the run (the invoking scheduler retries
//! the whole thing). Only the policy's own action may contain a failure,
//! which is reported as [`ActionOutcome::Failed`] without aborting the
//! remaining iterations.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::policy::{ActionOutcome, Decision, PrPolicy, PrSnapshot};
use crate::types::PullRequest;
use tracing::{info, warn};

/// Tally of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pull requests evaluated
    pub evaluated: usize,
    /// Actions performed
    pub actions: usize,
    /// Pull requests skipped (not ready, deferred, or already handled)
    pub skipped: usize,
    /// Actions attempted but failed
    pub failures: usize,
}

/// Fetch the CI and review state for one pull request
///
/// The listing payload omits the mergeability flag entirely, so the detail
/// is fetched first; that is the only payload where the platform reports
/// the computed flag.
async fn fetch_snapshot(
    platform: &dyn PlatformService,
    pr: PullRequest,
) -> Result<PrSnapshot> {
    let pr = platform.get_pull_request(pr.number).await?;
    let check_runs = platform.list_check_runs(&pr.head_sha).await?;
    let combined_status = platform.get_combined_status(&pr.head_sha).await?;
    let reviews = platform.list_reviews(pr.number).await?;

    Ok(PrSnapshot {
        pr,
        check_runs,
        combined_status,
        reviews,
    })
}

/// Apply a policy to every open pull request of the repository
///
/// Pull requests are processed sequentially in the platform's listing
/// order, each one fully (all reads, then the single write) before the
/// next.
pub async fn execute_policy(
    platform: &dyn PlatformService,
    policy: &dyn PrPolicy,
) -> Result<RunSummary> {
    let prs = platform.list_open_pull_requests().await?;
    info!(
        policy = policy.name(),
        count = prs.len(),
        "found open pull requests"
    );

    let mut summary = RunSummary::default();

    for pr in prs {
        let pr_number = pr.number;
        info!(pr_number, title = %pr.title, author = %pr.author, "processing pull request");
        summary.evaluated += 1;

        let snapshot = fetch_snapshot(platform, pr).await?;

        match policy.evaluate(&snapshot) {
            Decision::Ready => match policy.act(platform, &snapshot).await? {
                ActionOutcome::Completed => {
                    info!(pr_number, policy = policy.name(), "action performed");
                    summary.actions += 1;
                }
                ActionOutcome::Skipped(reason) => {
                    info!(pr_number, %reason, "skipped at action time");
                    summary.skipped += 1;
                }
                ActionOutcome::Failed(reason) => {
                    warn!(pr_number, %reason, "action failed, continuing");
                    summary.failures += 1;
                }
            },
            Decision::NotReady(reason) => {
                info!(pr_number, %reason, "not ready");
                summary.skipped += 1;
            }
            Decision::Skip(reason) => {
                info!(pr_number, %reason, "skipping");
                summary.skipped += 1;
            }
        }
    }

    info!(
        policy = policy.name(),
        evaluated = summary.evaluated,
        actions = summary.actions,
        skipped = summary.skipped,
        failures = summary.failures,
        "run complete"
    );
    Ok(summary)
}
