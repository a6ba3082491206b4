use std::fmt;

/// Non-fatal gaps in optional context around a release run.
/// When one of these occurs the run continues with an empty pull request set.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No workflow event payload was given, or the path is not a file
    NoEventPayload { path: Option<String> },
    /// The payload or environment lacks what the API call needs
    MissingGitHubContext { missing: Vec<&'static str> },
    /// No merge commits between the previous tag and HEAD
    NoMergeCommits { since: Option<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoEventPayload { path: None } => {
                write!(f, "No event payload found, skipping pull request lookup")
            }
            BoundaryWarning::NoEventPayload { path: Some(path) } => write!(
                f,
                "Event payload '{}' not found, skipping pull request lookup",
                path
            ),
            BoundaryWarning::MissingGitHubContext { missing } => write!(
                f,
                "Missing GitHub context for API call ({}), skipping pull request lookup",
                missing.join(", ")
            ),
            BoundaryWarning::NoMergeCommits { since: Some(tag) } => {
                write!(f, "No merge commits found since tag '{}'", tag)
            }
            BoundaryWarning::NoMergeCommits { since: None } => {
                write!(f, "No merge commits found in history")
            }
        }
    }
}
