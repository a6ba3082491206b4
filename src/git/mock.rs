use crate::error::{DrafterError, Result};
use crate::git::Repository;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations.
///
/// History is linear: merge commits and tags are recorded in the order they
/// are added, and a tag covers every merge commit added before it.
pub struct MockRepository {
    merge_commits: Vec<String>,
    tags: Vec<String>,
    tag_positions: HashMap<String, usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            merge_commits: Vec::new(),
            tags: Vec::new(),
            tag_positions: HashMap::new(),
        }
    }

    /// Record a merge commit on top of the current history
    pub fn add_merge_commit(&mut self, sha: impl Into<String>) {
        self.merge_commits.push(sha.into());
    }

    /// Tag the current history; later tags are newer
    pub fn add_tag(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.tag_positions
            .insert(name.clone(), self.merge_commits.len());
        self.tags.push(name);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags_newest_first(&self) -> Result<Vec<String>> {
        Ok(self.tags.iter().rev().cloned().collect())
    }

    fn merge_commits_since(&self, since: Option<&str>) -> Result<HashSet<String>> {
        let start = match since {
            None => 0,
            Some(tag) => *self.tag_positions.get(tag).ok_or_else(|| {
                DrafterError::Git(git2::Error::from_str(&format!(
                    "revspec 'refs/tags/{}' not found",
                    tag
                )))
            })?,
        };

        Ok(self.merge_commits[start..].iter().cloned().collect())
    }
}
