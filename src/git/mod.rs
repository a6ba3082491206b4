//! Git operations abstraction layer
//!
//! The release workflow needs two things from git: the repository's tags in
//! creation order and the merge commits made since a tag. The [Repository]
//! trait captures exactly that, with two implementations:
//!
//! - [repository::Git2Repository]: a real repository read through `git2`
//! - [mock::MockRepository]: an in-memory history for tests
//!
//! ```rust
//! # use drafterino::git::Repository;
//! # use drafterino::domain::find_latest_tag;
//! # fn example<R: Repository>(repo: &R) -> drafterino::Result<()> {
//! let previous = find_latest_tag(repo.list_tags_newest_first()?);
//! let merges = repo.merge_commits_since(Some(previous.as_str()))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::collections::HashSet;

/// Read-only git history queries used by the release workflow
pub trait Repository {
    /// All tag names, newest-created first.
    ///
    /// Annotated tags are dated by their tagger, lightweight tags by the
    /// commit they point at. The list may contain tags that are not versions.
    fn list_tags_newest_first(&self) -> Result<Vec<String>>;

    /// Full hashes of merge commits reachable from HEAD.
    ///
    /// With `since`, commits reachable from that tag are excluded; without
    /// it the whole history is searched.
    ///
    /// # Returns
    /// * `Ok(HashSet<String>)` - Hex hashes of commits with more than one parent
    /// * `Err` - If HEAD or the tag cannot be resolved
    fn merge_commits_since(&self, since: Option<&str>) -> Result<HashSet<String>>;
}
