//! Merge readiness policy
//!
//! Squash-merges pull requests that carry at least one approving review and
//! whose CI is green. Unlike approval, an empty check-run set satisfies the
//! check clause here: the approving review is the primary gate, and many
//! repositories report CI only through statuses or not at all.
//!
//! Mergeability is deliberately not judged from the snapshot; it is
//! re-fetched immediately before acting so the decision is as fresh as the
//! platform allows. A conflict appearing between the recheck and the merge
//! call itself still surfaces as a contained per-PR failure.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::policy::checks::{check_runs_green, combined_status_green};
use crate::policy::{ActionOutcome, Decision, PrPolicy, PrSnapshot};
use crate::types::{Mergeability, ReviewState};
use async_trait::async_trait;

/// Policy gating automatic squash merges
#[derive(Debug, Clone, Copy, Default)]
pub struct MergePolicy;

impl MergePolicy {
    /// Create the merge policy
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PrPolicy for MergePolicy {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn evaluate(&self, snapshot: &PrSnapshot) -> Decision {
        let has_approval = snapshot
            .reviews
            .iter()
            .any(|r| r.state == ReviewState::Approved);
        if !has_approval {
            return Decision::NotReady("does not have approval".to_string());
        }

        if !check_runs_green(&snapshot.check_runs, true) {
            return Decision::NotReady("has pending or failing check runs".to_string());
        }

        if !combined_status_green(&snapshot.combined_status) {
            return Decision::NotReady(format!(
                "has failing statuses: {}",
                snapshot.combined_status.state
            ));
        }

        Decision::Ready
    }

    async fn act(
        &self,
        platform: &dyn PlatformService,
        snapshot: &PrSnapshot,
    ) -> Result<ActionOutcome> {
        // Re-fetch so the mergeability flag is as fresh as possible; the
        // snapshot's value may have gone stale since it was gathered.
        let fresh = platform.get_pull_request(snapshot.pr.number).await?;

        match fresh.mergeability {
            Mergeability::Conflicted => {
                return Ok(ActionOutcome::Skipped("has merge conflicts".to_string()));
            }
            Mergeability::Unknown => {
                return Ok(ActionOutcome::Skipped(
                    "merge status not yet computed".to_string(),
                ));
            }
            Mergeability::Mergeable => {}
        }

        let commit_title = format!("{} (#{})", fresh.title, fresh.number);
        let commit_message = fresh.body.unwrap_or_default();

        // Merge failure is contained: the platform may detect a conflict
        // between the recheck and the merge call. The remaining pull
        // requests still get processed.
        match platform
            .squash_merge(fresh.number, &commit_title, &commit_message)
            .await
        {
            Ok(outcome) if outcome.merged => Ok(ActionOutcome::Completed),
            Ok(outcome) => Ok(ActionOutcome::Failed(
                outcome
                    .message
                    .unwrap_or_else(|| "merge was not performed".to_string()),
            )),
            Err(e) => Ok(ActionOutcome::Failed(e.to_string())),
        }
    }
}
