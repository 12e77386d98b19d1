//! Readiness policies - pure decision logic
//!
//! Each subcommand applies one fixed policy to every open pull request. A
//! policy has two halves: a pure [`evaluate`](PrPolicy::evaluate) over a
//! pre-fetched [`PrSnapshot`] (no I/O, easily unit tested), and an effectful
//! [`act`](PrPolicy::act) that performs the single terminal action when the
//! evaluation says the pull request is ready. Adding a third policy means
//! implementing the trait; the check/status aggregation in [`checks`] is
//! shared.

mod approve;
mod checks;
mod merge;

pub use approve::{APPROVAL_BODY, ApprovalPolicy};
pub use merge::MergePolicy;

use crate::error::Result;
use crate::platform::PlatformService;
use crate::types::{CheckRun, CombinedStatus, PullRequest, Review};
use async_trait::async_trait;

/// Everything a policy needs to evaluate one pull request
///
/// Fetched upfront by the batch loop so that evaluation itself is pure.
#[derive(Debug, Clone)]
pub struct PrSnapshot {
    /// The pull request as returned by the detail fetch (the listing
    /// payload omits the mergeability flag)
    pub pr: PullRequest,
    /// Check runs reported against the head commit
    pub check_runs: Vec<CheckRun>,
    /// Combined legacy status for the head commit
    pub combined_status: CombinedStatus,
    /// Reviews on the pull request
    pub reviews: Vec<Review>,
}

/// Outcome of evaluating a policy against one pull request
///
/// The reject/skip split mirrors the tri-state mergeability flag: a
/// rejection means a condition definitively failed, a skip means there is
/// nothing to do (yet) and a later run may decide differently. Both are
/// logged and the batch moves on; neither is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// All gating conditions hold; perform the action
    Ready,
    /// A condition definitively failed
    NotReady(String),
    /// Not decidable yet, or nothing left to do
    Skip(String),
}

impl Decision {
    /// Whether the action should be performed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// The reason, when there is one
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ready => None,
            Self::NotReady(reason) | Self::Skip(reason) => Some(reason),
        }
    }
}

/// Outcome of performing a policy's action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was performed
    Completed,
    /// A last-moment recheck said not to act (e.g. mergeability went stale)
    Skipped(String),
    /// The action was attempted and failed; the batch continues
    Failed(String),
}

/// A readiness policy over pull requests
///
/// `evaluate` must be pure. `act` is called only when `evaluate` returned
/// [`Decision::Ready`]; it may perform its own last-moment rechecks. An
/// `Err` from `act` aborts the whole run, so implementations that tolerate
/// action failure (merging) must catch it and return
/// [`ActionOutcome::Failed`] instead.
#[async_trait]
pub trait PrPolicy: Send + Sync {
    /// Short name for logging ("approve", "merge")
    fn name(&self) -> &'static str;

    /// Decide whether the pull request is ready for this policy's action
    fn evaluate(&self, snapshot: &PrSnapshot) -> Decision;

    /// Perform the action for a ready pull request
    async fn act(
        &self,
        platform: &dyn PlatformService,
        snapshot: &PrSnapshot,
    ) -> Result<ActionOutcome>;
}
