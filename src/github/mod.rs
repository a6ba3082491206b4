//! Pull request lookup through the GitHub REST API
//!
//! - [context]: resolves owner, repository and token from the workflow event payload
//! - [client::GitHubClient]: blocking REST client for closed pull requests
//! - [mock::StaticPullRequests]: fixed pull request list for tests

pub mod client;
pub mod context;
pub mod mock;

pub use client::GitHubClient;
pub use context::{ContextResolution, GitHubContext};
pub use mock::StaticPullRequests;

use crate::domain::PullRequest;
use crate::error::Result;

/// Source of closed pull requests for the current repository
pub trait PullRequestSource {
    /// Recently closed pull requests, merged or not
    fn closed_pull_requests(&self) -> Result<Vec<PullRequest>>;
}
