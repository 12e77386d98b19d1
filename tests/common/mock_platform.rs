//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_autopilot::error::{Error, Result};
use pr_autopilot::platform::PlatformService;
use pr_autopilot::types::{
    CheckRun, CombinedStatus, MergeOutcome, PullRequest, RepoConfig, Review, StatusState,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `approve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveCall {
    pub pr_number: u64,
    pub body: String,
}

/// Call record for `squash_merge`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub pr_number: u64,
    pub commit_title: String,
    pub commit_message: String,
}

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using a mocking
/// crate, keeping full control over response maps and call recording.
///
/// Features:
/// - Open PR list preserved in insertion order
/// - Per-SHA check run and combined status responses
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    repo: RepoConfig,
    open_prs: Mutex<Vec<PullRequest>>,
    pr_responses: Mutex<HashMap<u64, PullRequest>>,
    check_run_responses: Mutex<HashMap<String, Vec<CheckRun>>>,
    combined_status_responses: Mutex<HashMap<String, CombinedStatus>>,
    review_responses: Mutex<HashMap<u64, Vec<Review>>>,
    merge_responses: Mutex<HashMap<u64, MergeOutcome>>,
    // Call tracking
    get_pr_calls: Mutex<Vec<u64>>,
    check_run_calls: Mutex<Vec<String>>,
    combined_status_calls: Mutex<Vec<String>>,
    review_calls: Mutex<Vec<u64>>,
    approve_calls: Mutex<Vec<ApproveCall>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    // Error injection
    error_on_list_prs: Mutex<Option<String>>,
    error_on_check_runs: Mutex<Option<String>>,
    error_on_combined_status: Mutex<Option<String>>,
    error_on_reviews: Mutex<Option<String>>,
    error_on_approve: Mutex<Option<String>>,
    merge_errors: Mutex<HashMap<u64, String>>,
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformService {
    /// Create a new mock scoped to a test repository
    pub fn new() -> Self {
        Self {
            repo: RepoConfig {
                owner: "test".to_string(),
                repo: "repo".to_string(),
                host: None,
            },
            open_prs: Mutex::new(Vec::new()),
            pr_responses: Mutex::new(HashMap::new()),
            check_run_responses: Mutex::new(HashMap::new()),
            combined_status_responses: Mutex::new(HashMap::new()),
            review_responses: Mutex::new(HashMap::new()),
            merge_responses: Mutex::new(HashMap::new()),
            get_pr_calls: Mutex::new(Vec::new()),
            check_run_calls: Mutex::new(Vec::new()),
            combined_status_calls: Mutex::new(Vec::new()),
            review_calls: Mutex::new(Vec::new()),
            approve_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_list_prs: Mutex::new(None),
            error_on_check_runs: Mutex::new(None),
            error_on_combined_status: Mutex::new(None),
            error_on_reviews: Mutex::new(None),
            error_on_approve: Mutex::new(None),
            merge_errors: Mutex::new(HashMap::new()),
        }
    }

    // === Response configuration ===

    /// Add a PR to the open list (also registered for `get_pull_request`)
    pub fn add_open_pr(&self, pr: PullRequest) {
        self.pr_responses.lock().unwrap().insert(pr.number, pr.clone());
        self.open_prs.lock().unwrap().push(pr);
    }

    /// Override the `get_pull_request` response for a specific PR
    ///
    /// Lets the re-fetched detail disagree with the listing snapshot, e.g.
    /// conflicts appearing between check and act.
    pub fn set_pr_response(&self, pr: PullRequest) {
        self.pr_responses.lock().unwrap().insert(pr.number, pr);
    }

    /// Set the check runs reported for a commit
    pub fn set_check_runs(&self, sha: &str, runs: Vec<CheckRun>) {
        self.check_run_responses
            .lock()
            .unwrap()
            .insert(sha.to_string(), runs);
    }

    /// Set the combined status for a commit
    pub fn set_combined_status(&self, sha: &str, status: CombinedStatus) {
        self.combined_status_responses
            .lock()
            .unwrap()
            .insert(sha.to_string(), status);
    }

    /// Set the reviews for a PR
    pub fn set_reviews(&self, pr_number: u64, reviews: Vec<Review>) {
        self.review_responses
            .lock()
            .unwrap()
            .insert(pr_number, reviews);
    }

    /// Set the merge response for a PR
    pub fn set_merge_response(&self, pr_number: u64, outcome: MergeOutcome) {
        self.merge_responses
            .lock()
            .unwrap()
            .insert(pr_number, outcome);
    }

    // === Error injection ===

    /// Make `list_open_pull_requests` return an error
    pub fn fail_list_prs(&self, msg: &str) {
        *self.error_on_list_prs.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_check_runs` return an error
    pub fn fail_check_runs(&self, msg: &str) {
        *self.error_on_check_runs.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_combined_status` return an error
    pub fn fail_combined_status(&self, msg: &str) {
        *self.error_on_combined_status.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_reviews` return an error
    pub fn fail_reviews(&self, msg: &str) {
        *self.error_on_reviews.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `approve` return an error
    pub fn fail_approve(&self, msg: &str) {
        *self.error_on_approve.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `squash_merge` return an error for a specific PR
    pub fn fail_merge_for(&self, pr_number: u64, msg: &str) {
        self.merge_errors
            .lock()
            .unwrap()
            .insert(pr_number, msg.to_string());
    }

    // === Call verification ===

    /// Get all `approve` calls
    pub fn get_approve_calls(&self) -> Vec<ApproveCall> {
        self.approve_calls.lock().unwrap().clone()
    }

    /// Get all `squash_merge` calls
    pub fn get_merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Get all `get_pull_request` calls
    pub fn get_pr_fetch_calls(&self) -> Vec<u64> {
        self.get_pr_calls.lock().unwrap().clone()
    }

    /// Count of `approve` calls
    pub fn approve_call_count(&self) -> usize {
        self.approve_calls.lock().unwrap().len()
    }

    /// Count of `squash_merge` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Assert `approve` was called for a specific PR
    pub fn assert_approve_called(&self, pr_number: u64) {
        let calls = self.get_approve_calls();
        assert!(
            calls.iter().any(|c| c.pr_number == pr_number),
            "Expected approve({pr_number}) but got: {calls:?}"
        );
    }

    /// Assert `approve` was NOT called for a specific PR
    pub fn assert_approve_not_called(&self, pr_number: u64) {
        let calls = self.get_approve_calls();
        assert!(
            !calls.iter().any(|c| c.pr_number == pr_number),
            "Expected approve({pr_number}) NOT to be called but it was: {calls:?}"
        );
    }

    /// Assert `squash_merge` was called for a specific PR
    pub fn assert_merge_called(&self, pr_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.pr_number == pr_number),
            "Expected squash_merge({pr_number}) but got: {calls:?}"
        );
    }

    /// Assert `squash_merge` was NOT called for a specific PR
    pub fn assert_merge_not_called(&self, pr_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            !calls.iter().any(|c| c.pr_number == pr_number),
            "Expected squash_merge({pr_number}) NOT to be called but it was: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        if let Some(msg) = self.error_on_list_prs.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(self.open_prs.lock().unwrap().clone())
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        self.get_pr_calls.lock().unwrap().push(number);

        let responses = self.pr_responses.lock().unwrap();
        responses.get(&number).cloned().ok_or_else(|| {
            Error::GitHubApi(format!(
                "get_pull_request: no response configured for PR #{number}"
            ))
        })
    }

    async fn list_check_runs(&self, sha: &str) -> Result<Vec<CheckRun>> {
        self.check_run_calls.lock().unwrap().push(sha.to_string());

        if let Some(msg) = self.error_on_check_runs.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.check_run_responses.lock().unwrap();
        Ok(responses.get(sha).cloned().unwrap_or_default())
    }

    async fn get_combined_status(&self, sha: &str) -> Result<CombinedStatus> {
        self.combined_status_calls
            .lock()
            .unwrap()
            .push(sha.to_string());

        if let Some(msg) = self.error_on_combined_status.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.combined_status_responses.lock().unwrap();
        Ok(responses.get(sha).cloned().unwrap_or(CombinedStatus {
            state: StatusState::Pending,
            statuses: vec![],
        }))
    }

    async fn list_reviews(&self, number: u64) -> Result<Vec<Review>> {
        self.review_calls.lock().unwrap().push(number);

        if let Some(msg) = self.error_on_reviews.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.review_responses.lock().unwrap();
        Ok(responses.get(&number).cloned().unwrap_or_default())
    }

    async fn approve(&self, number: u64, body: &str) -> Result<()> {
        if let Some(msg) = self.error_on_approve.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        self.approve_calls.lock().unwrap().push(ApproveCall {
            pr_number: number,
            body: body.to_string(),
        });
        Ok(())
    }

    async fn squash_merge(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<MergeOutcome> {
        self.merge_calls.lock().unwrap().push(MergeCall {
            pr_number: number,
            commit_title: commit_title.to_string(),
            commit_message: commit_message.to_string(),
        });

        if let Some(msg) = self.merge_errors.lock().unwrap().get(&number) {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.merge_responses.lock().unwrap();
        Ok(responses.get(&number).cloned().unwrap_or(MergeOutcome {
            merged: true,
            sha: Some(format!("merged-sha-{number}")),
            message: None,
        }))
    }

    fn repo(&self) -> &RepoConfig {
        &self.repo
    }
}
