//! Shared fixtures for pr-autopilot tests

#![allow(dead_code)]

pub mod mock_platform;

use pr_autopilot::policy::PrSnapshot;
use pr_autopilot::types::{
    CheckConclusion, CheckRun, CheckRunStatus, CombinedStatus, CommitStatus, Mergeability,
    PullRequest, Review, ReviewState, StatusState,
};

/// Build a pull request fixture
pub fn make_pr(number: u64, author: &str, mergeability: Mergeability) -> PullRequest {
    PullRequest {
        number,
        title: format!("Test PR {number}"),
        author: author.to_string(),
        body: Some(format!("Body of PR {number}")),
        head_sha: format!("sha-{number}"),
        mergeability,
    }
}

/// Build a completed check run with the given conclusion
pub fn completed_check(name: &str, conclusion: CheckConclusion) -> CheckRun {
    CheckRun {
        name: name.to_string(),
        status: CheckRunStatus::Completed,
        conclusion: Some(conclusion),
    }
}

/// Build an in-progress check run (no conclusion yet)
pub fn pending_check(name: &str) -> CheckRun {
    CheckRun {
        name: name.to_string(),
        status: CheckRunStatus::Pending,
        conclusion: None,
    }
}

/// Build a combined status with `entries` individual statuses, all in `state`
pub fn make_combined_status(state: StatusState, entries: usize) -> CombinedStatus {
    CombinedStatus {
        state,
        statuses: (0..entries)
            .map(|i| CommitStatus {
                context: format!("ci/reporter-{i}"),
                state,
            })
            .collect(),
    }
}

/// Build a review fixture
pub fn make_review(reviewer: &str, state: ReviewState) -> Review {
    Review {
        reviewer: reviewer.to_string(),
        state,
    }
}

/// Assemble a snapshot from its parts
pub fn make_snapshot(
    pr: PullRequest,
    check_runs: Vec<CheckRun>,
    combined_status: CombinedStatus,
    reviews: Vec<Review>,
) -> PrSnapshot {
    PrSnapshot {
        pr,
        check_runs,
        combined_status,
        reviews,
    }
}

/// Snapshot of an authorized, mergeable PR with fully green CI and no reviews
pub fn green_approval_snapshot(number: u64, author: &str) -> PrSnapshot {
    make_snapshot(
        make_pr(number, author, Mergeability::Mergeable),
        vec![completed_check("build", CheckConclusion::Success)],
        make_combined_status(StatusState::Success, 1),
        vec![],
    )
}
