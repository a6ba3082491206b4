//! Domain logic - pure release rules independent of git, HTTP and files

pub mod pull_request;
pub mod version;

pub use pull_request::{select_merged_since, Label, PullRequest};
pub use version::{find_latest_tag, BumpKind, SemanticVersion, NO_TAG};
