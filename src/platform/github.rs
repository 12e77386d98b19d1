//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    CheckRun, CombinedStatus, MergeOutcome, Mergeability, PullRequest, RepoConfig, Review,
    ReviewState,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    repo: RepoConfig,
    /// Token for raw HTTP requests (check runs, combined status)
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("pr-autopilot")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            repo: RepoConfig { owner, repo, host },
            token: token.to_string(),
            http_client,
            api_host,
        })
    }

    /// Issue an authenticated GET against a raw REST endpoint
    ///
    /// GitHub has two CI reporting systems, the legacy commit status API and
    /// the modern check runs API, and both must be read to judge CI health.
    /// Neither has a typed octocrab surface we can use here, so these go
    /// through reqwest directly.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str, what: &str) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch {what}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {what}: HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse {what}: {e}")))
    }
}

/// Helper to convert an octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_default(),
        body: pr.body.clone(),
        head_sha: pr.head.sha.clone(),
        mergeability: Mergeability::from_flag(pr.mergeable),
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        debug!("listing open pull requests");
        let page = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(100)
            .send()
            .await?;

        let prs = self.client.all_pages(page).await?;
        let result: Vec<PullRequest> = prs.iter().map(pr_from_octocrab).collect();
        debug!(count = result.len(), "listed open pull requests");
        Ok(result)
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        debug!(pr_number = number, "getting pull request");
        let pr = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .get(number)
            .await?;

        let result = pr_from_octocrab(&pr);
        debug!(pr_number = number, mergeability = %result.mergeability, "got pull request");
        Ok(result)
    }

    async fn list_check_runs(&self, sha: &str) -> Result<Vec<CheckRun>> {
        #[derive(Deserialize)]
        struct CheckRunsResponse {
            check_runs: Vec<CheckRun>,
        }

        debug!(sha, "listing check runs");
        let url = format!(
            "https://{}/repos/{}/{}/commits/{}/check-runs?per_page=100",
            self.api_host, self.repo.owner, self.repo.repo, sha
        );

        let response: CheckRunsResponse = self.get_json(&url, "check runs").await?;
        debug!(sha, count = response.check_runs.len(), "listed check runs");
        Ok(response.check_runs)
    }

    async fn get_combined_status(&self, sha: &str) -> Result<CombinedStatus> {
        debug!(sha, "getting combined status");
        let url = format!(
            "https://{}/repos/{}/{}/commits/{}/status",
            self.api_host, self.repo.owner, self.repo.repo, sha
        );

        let status: CombinedStatus = self.get_json(&url, "combined status").await?;
        debug!(sha, state = ?status.state, count = status.statuses.len(), "got combined status");
        Ok(status)
    }

    async fn list_reviews(&self, number: u64) -> Result<Vec<Review>> {
        debug!(pr_number = number, "listing reviews");
        let reviews = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .list_reviews(number)
            .send()
            .await?;

        let result: Vec<Review> = reviews
            .items
            .into_iter()
            .map(|r| Review {
                reviewer: r.user.as_ref().map(|u| u.login.clone()).unwrap_or_default(),
                state: match r.state {
                    Some(octocrab::models::pulls::ReviewState::Approved) => ReviewState::Approved,
                    Some(octocrab::models::pulls::ReviewState::ChangesRequested) => {
                        ReviewState::ChangesRequested
                    }
                    Some(octocrab::models::pulls::ReviewState::Commented) => {
                        ReviewState::Commented
                    }
                    Some(octocrab::models::pulls::ReviewState::Dismissed) => {
                        ReviewState::Dismissed
                    }
                    Some(_) | None => ReviewState::Pending,
                },
            })
            .collect();
        debug!(pr_number = number, count = result.len(), "listed reviews");
        Ok(result)
    }

    async fn approve(&self, number: u64, body: &str) -> Result<()> {
        debug!(pr_number = number, "approving pull request");
        let route = format!(
            "/repos/{}/{}/pulls/{}/reviews",
            self.repo.owner, self.repo.repo, number
        );

        let _: serde_json::Value = self
            .client
            .post(
                route,
                Some(&serde_json::json!({
                    "event": "APPROVE",
                    "body": body,
                })),
            )
            .await?;

        debug!(pr_number = number, "approved pull request");
        Ok(())
    }

    async fn squash_merge(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<MergeOutcome> {
        debug!(pr_number = number, "merging pull request");

        let result = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .merge(number)
            .method(octocrab::params::pulls::MergeMethod::Squash)
            .title(commit_title)
            .message(commit_message)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let outcome = MergeOutcome {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number = number,
            merged = outcome.merged,
            sha = ?outcome.sha,
            "merge complete"
        );
        Ok(outcome)
    }

    fn repo(&self) -> &RepoConfig {
        &self.repo
    }
}
