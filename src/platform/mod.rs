//! Platform services for the hosting-platform API
//!
//! Provides the collaborator interface the policies are evaluated against.
//! Everything the automation knows about a pull request comes through here,
//! and the only side effects it performs (approving, merging) go back
//! through here.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{CheckRun, CombinedStatus, MergeOutcome, PullRequest, RepoConfig, Review};
use async_trait::async_trait;

/// Platform service trait for pull request automation
///
/// Abstracts the hosting platform so the policy loop can be tested against
/// a mock. All operations are scoped to the single repository named by
/// [`repo`](Self::repo).
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List all open pull requests (paginated, page size 100)
    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>>;

    /// Fetch a single pull request
    ///
    /// The detail payload is the only one carrying the mergeability flag;
    /// the listing payload omits it. Called once per snapshot and again
    /// immediately before merging, since the flag may have gone stale.
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;

    /// List check runs reported against a commit
    async fn list_check_runs(&self, sha: &str) -> Result<Vec<CheckRun>>;

    /// Get the combined legacy status for a commit
    async fn get_combined_status(&self, sha: &str) -> Result<CombinedStatus>;

    /// List reviews on a pull request
    async fn list_reviews(&self, number: u64) -> Result<Vec<Review>>;

    /// Submit an approving review with the given body
    async fn approve(&self, number: u64, body: &str) -> Result<()>;

    /// Squash-merge a pull request
    ///
    /// The caller supplies the commit title and message; the platform may
    /// still refuse (e.g. conflicts appearing between check and act), which
    /// surfaces as an error or a [`MergeOutcome`] with `merged == false`.
    async fn squash_merge(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<MergeOutcome>;

    /// Get the repository this service is scoped to
    fn repo(&self) -> &RepoConfig;
}
