//! Approval readiness policy
//!
//! Approves pull requests from allow-listed authors once CI is green and no
//! merge conflicts exist. The duplicate-approval guard makes re-runs
//! harmless: a pull request already carrying an approving review from the
//! automation login is skipped.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::policy::checks::{check_runs_green, combined_status_green, has_ci_signal};
use crate::policy::{ActionOutcome, Decision, PrPolicy, PrSnapshot};
use crate::types::{Mergeability, ReviewState};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Fixed body of the review the automation submits
pub const APPROVAL_BODY: &str =
    "✅ Auto-approved: PR author is authorized, all CI checks passed, and no merge conflicts detected.";

/// Policy gating automatic approval
#[derive(Debug, Clone)]
pub struct ApprovalPolicy {
    /// Authors whose pull requests may be approved
    authorized_users: BTreeSet<String>,
    /// Login the automation's own reviews appear under
    bot_login: String,
}

impl ApprovalPolicy {
    /// Create a policy from an explicit allow-list and automation login
    #[must_use]
    pub const fn new(authorized_users: BTreeSet<String>, bot_login: String) -> Self {
        Self {
            authorized_users,
            bot_login,
        }
    }
}

impl From<crate::config::ApprovalConfig> for ApprovalPolicy {
    fn from(config: crate::config::ApprovalConfig) -> Self {
        Self::new(config.authorized_users, config.bot_login)
    }
}

#[async_trait]
impl PrPolicy for ApprovalPolicy {
    fn name(&self) -> &'static str {
        "approve"
    }

    fn evaluate(&self, snapshot: &PrSnapshot) -> Decision {
        let pr = &snapshot.pr;

        if !self.authorized_users.contains(&pr.author) {
            return Decision::NotReady(format!(
                "author {} is not in authorized list",
                pr.author
            ));
        }

        match pr.mergeability {
            Mergeability::Conflicted => {
                return Decision::NotReady("has merge conflicts".to_string());
            }
            Mergeability::Unknown => {
                return Decision::Skip("merge status not yet computed".to_string());
            }
            Mergeability::Mergeable => {}
        }

        if !has_ci_signal(&snapshot.check_runs, &snapshot.combined_status) {
            return Decision::Skip("no CI checks found".to_string());
        }

        if !check_runs_green(&snapshot.check_runs, false) {
            return Decision::NotReady("not all check runs passed".to_string());
        }

        if !combined_status_green(&snapshot.combined_status) {
            return Decision::NotReady(format!(
                "combined status is not success: {}",
                snapshot.combined_status.state
            ));
        }

        let already_approved = snapshot
            .reviews
            .iter()
            .any(|r| r.reviewer == self.bot_login && r.state == ReviewState::Approved);
        if already_approved {
            return Decision::Skip("already approved by this workflow".to_string());
        }

        Decision::Ready
    }

    async fn act(
        &self,
        platform: &dyn PlatformService,
        snapshot: &PrSnapshot,
    ) -> Result<ActionOutcome> {
        // Approval failures are upstream failures, not per-PR conditions;
        // the `?` terminates the run.
        platform.approve(snapshot.pr.number, APPROVAL_BODY).await?;
        Ok(ActionOutcome::Completed)
    }
}
