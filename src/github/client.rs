use reqwest::blocking::Client;
use reqwest::header;
use std::time::Duration;

use crate::domain::PullRequest;
use crate::error::{DrafterError, Result};
use crate::github::{GitHubContext, PullRequestSource};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PAGE_SIZE: u32 = 100;

/// Blocking GitHub REST client scoped to one repository
pub struct GitHubClient {
    client: Client,
    base_url: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    pub fn new(context: &GitHubContext, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", context.token))
                .map_err(|e| DrafterError::api(format!("Invalid token header: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("drafterino/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(60))
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: context.owner.clone(),
            repo: context.repo.clone(),
        })
    }

    /// URL of the most recently updated closed pull requests
    pub fn closed_pulls_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls?state=closed&sort=updated&direction=desc&per_page={}",
            self.base_url, self.owner, self.repo, PAGE_SIZE
        )
    }
}

impl PullRequestSource for GitHubClient {
    fn closed_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let url = self.closed_pulls_url();
        tracing::info!("Fetching closed pull requests for {}/{}", self.owner, self.repo);

        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(DrafterError::api(format!(
                "Failed to fetch pull requests: {} {}",
                status, body
            )));
        }

        let pulls: Vec<PullRequest> = response.json()?;
        tracing::debug!(count = pulls.len(), "received closed pull requests");
        Ok(pulls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> GitHubContext {
        GitHubContext {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            token: "secret".to_string(),
        }
    }

    #[test]
    fn test_closed_pulls_url() {
        let client = GitHubClient::new(&context(), DEFAULT_API_URL).unwrap();
        assert_eq!(
            client.closed_pulls_url(),
            "https://api.github.com/repos/acme/widgets/pulls?state=closed&sort=updated&direction=desc&per_page=100"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GitHubClient::new(&context(), "https://ghe.example.com/api/v3/").unwrap();
        assert!(client
            .closed_pulls_url()
            .starts_with("https://ghe.example.com/api/v3/repos/acme/widgets/pulls?"));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let mut ctx = context();
        ctx.token = "line\nbreak".to_string();
        assert!(matches!(
            GitHubClient::new(&ctx, DEFAULT_API_URL),
            Err(DrafterError::Api(_))
        ));
    }
}
