use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::error::{ApiError, Result};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct Repository {
    stargazers_count: Option<u64>,
}

/// Talks to the GitHub REST API directly, outside of [`crate::ApiClient`].
pub struct GithubClient {
    base_url: String,
    client: Client,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GITHUB_API_URL)
    }

    /// Uses `GITHUB_API_URL` when set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());
        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            // GitHub rejects requests without a User-Agent
            client: Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Star count of `owner/repo`. Never fails: any error is logged and
    /// reported as zero stars.
    pub async fn get_star_count(&self, owner: &str, repo: &str) -> u64 {
        match self.fetch_star_count(owner, repo).await {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("Error fetching GitHub stars for {}/{}: {}", owner, repo, e);
                0
            }
        }
    }

    async fn fetch_star_count(&self, owner: &str, repo: &str) -> Result<u64> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message: "Failed to fetch GitHub data".to_string(),
            }
            .into());
        }

        let body = response.bytes().await?;
        let repository: Repository = serde_json::from_slice(&body)?;

        Ok(repository.stargazers_count.unwrap_or(0))
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
