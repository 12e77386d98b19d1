//! Core types for pr-autopilot

use serde::{Deserialize, Serialize};

/// Repository the run is scoped to
#[derive(Debug, Clone)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// Whether a pull request can be merged without conflicts
///
/// GitHub computes this lazily, so "not yet known" is a real state that must
/// be distinguished from "has conflicts": unknown means skip and retry on a
/// later run, conflicted means the pull request is definitively not ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mergeability {
    /// No conflicts, the branch can be merged
    Mergeable,
    /// Merge conflicts with the base branch
    Conflicted,
    /// The platform has not finished computing mergeability
    Unknown,
}

impl Mergeability {
    /// Convert from the platform's nullable boolean
    #[must_use]
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Mergeable,
            Some(false) => Self::Conflicted,
            None => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Mergeability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mergeable => write!(f, "mergeable"),
            Self::Conflicted => write!(f, "conflicted"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// An open pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Login of the PR author
    pub author: String,
    /// PR body/description
    pub body: Option<String>,
    /// Head commit SHA (the ref checks and statuses are reported against)
    pub head_sha: String,
    /// Whether the PR can be merged without conflicts
    pub mergeability: Mergeability,
}

/// Completion state of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunStatus {
    /// The check run has finished
    Completed,
    /// Queued, in progress, or otherwise not finished
    #[serde(other)]
    Pending,
}

/// Conclusion of a completed check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConclusion {
    /// The check passed
    Success,
    /// The check failed
    Failure,
    /// The check finished without affecting the overall result
    Neutral,
    /// The check was skipped
    Skipped,
    /// The check was cancelled
    Cancelled,
    /// The check timed out
    TimedOut,
    /// The check requires manual action
    ActionRequired,
    /// Any other conclusion the platform may report
    #[serde(other)]
    Other,
}

impl CheckConclusion {
    /// Conclusions that count as passing: success, skipped, neutral
    #[must_use]
    pub const fn is_passing(self) -> bool {
        matches!(self, Self::Success | Self::Skipped | Self::Neutral)
    }
}

/// A single named CI job result reported against a commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRun {
    /// Check run name
    pub name: String,
    /// Completion state
    pub status: CheckRunStatus,
    /// Conclusion (None while the run is in progress)
    pub conclusion: Option<CheckConclusion>,
}

/// State of a commit status or of the combined status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    /// All reporters passed
    Success,
    /// At least one reporter is still pending
    Pending,
    /// At least one reporter failed
    Failure,
    /// At least one reporter errored
    #[serde(other)]
    Error,
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Pending => write!(f, "pending"),
            Self::Failure => write!(f, "failure"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// An individual status reported via the legacy status API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Reporter context (e.g. "ci/circleci")
    pub context: String,
    /// State of this reporter
    pub state: StatusState,
}

/// Aggregate status across all legacy status reporters for a commit
///
/// Distinct from check runs: this is GitHub's older, parallel CI reporting
/// mechanism. Both must be consulted to judge CI health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedStatus {
    /// Aggregate state computed by the platform
    pub state: StatusState,
    /// Individual status entries
    pub statuses: Vec<CommitStatus>,
}

/// State of a pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// The reviewer approved the changes
    Approved,
    /// The reviewer requested changes
    ChangesRequested,
    /// The reviewer commented without a verdict
    Commented,
    /// The review was dismissed
    Dismissed,
    /// Any other review state
    #[serde(other)]
    Pending,
}

/// A review on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Login of the reviewer
    pub reviewer: String,
    /// Review state
    pub state: ReviewState,
}

/// Result of a merge call
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Whether the merge was performed
    pub merged: bool,
    /// SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the platform (especially on failure)
    pub message: Option<String>,
}
