use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A label attached to a pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label { name: name.into() }
    }
}

/// A closed pull request as reported by the pull request source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PullRequest {
    pub number: u64,

    #[serde(default = "untitled")]
    pub title: String,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub merge_commit_sha: Option<String>,

    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

fn untitled() -> String {
    "Untitled".to_string()
}

impl PullRequest {
    /// Create an unmerged pull request with the given labels
    pub fn new<I, S>(number: u64, title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PullRequest {
            number,
            title: title.into(),
            labels: labels.into_iter().map(Label::new).collect(),
            merge_commit_sha: None,
            merged_at: None,
        }
    }

    /// Mark the pull request as merged through the given commit
    pub fn merged(mut self, sha: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.merge_commit_sha = Some(sha.into());
        self.merged_at = Some(at);
        self
    }

    /// Label names as a set
    pub fn label_names(&self) -> HashSet<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }

    /// True if any of the pull request's labels is in `labels`
    pub fn has_any_label(&self, labels: &HashSet<String>) -> bool {
        self.label_names()
            .into_iter()
            .any(|name| labels.contains(name))
    }
}

/// Keeps merged pull requests whose merge commit is in `merge_commits`,
/// preserving input order.
pub fn select_merged_since(
    pull_requests: Vec<PullRequest>,
    merge_commits: &HashSet<String>,
) -> Vec<PullRequest> {
    pull_requests
        .into_iter()
        .filter(|pr| pr.merged_at.is_some())
        .filter(|pr| {
            pr.merge_commit_sha
                .as_ref()
                .is_some_and(|sha| merge_commits.contains(sha))
        })
        .collect()
}
