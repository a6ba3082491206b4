use crate::domain::PullRequest;
use crate::error::{DrafterError, Result};
use crate::github::PullRequestSource;

/// Pull request source that returns a fixed list, or a fixed failure
pub struct StaticPullRequests {
    pulls: Vec<PullRequest>,
    failure: Option<String>,
}

impl StaticPullRequests {
    pub fn new(pulls: Vec<PullRequest>) -> Self {
        StaticPullRequests {
            pulls,
            failure: None,
        }
    }

    /// A source whose every call fails with an API error
    pub fn failing(message: impl Into<String>) -> Self {
        StaticPullRequests {
            pulls: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl PullRequestSource for StaticPullRequests {
    fn closed_pull_requests(&self) -> Result<Vec<PullRequest>> {
        match &self.failure {
            Some(message) => Err(DrafterError::api(message.clone())),
            None => Ok(self.pulls.clone()),
        }
    }
}
