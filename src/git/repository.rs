use crate::error::Result;
use git2::{Object, Oid, Repository as Git2Repo};
use std::collections::HashSet;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn tag_object(&self, tag_name: &str) -> Result<Object<'_>> {
        Ok(self.repo.revparse_single(&format!("refs/tags/{}", tag_name))?)
    }

    /// Creation time of a tag in seconds since the epoch.
    ///
    /// `None` if the tag does not lead to a commit.
    fn tag_creator_time(&self, tag_name: &str) -> Result<Option<i64>> {
        let object = self.tag_object(tag_name)?;

        if let Some(tagger) = object.as_tag().and_then(|tag| tag.tagger()) {
            return Ok(Some(tagger.when().seconds()));
        }

        match object.peel_to_commit() {
            Ok(commit) => Ok(Some(commit.time().seconds())),
            Err(_) => Ok(None),
        }
    }

    fn tag_commit_oid(&self, tag_name: &str) -> Result<Oid> {
        Ok(self.tag_object(tag_name)?.peel_to_commit()?.id())
    }
}

impl super::Repository for Git2Repository {
    fn list_tags_newest_first(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut dated = Vec::new();
        for name in names.iter().flatten() {
            match self.tag_creator_time(name)? {
                Some(time) => dated.push((time, name.to_string())),
                None => tracing::debug!(tag = name, "skipping tag that does not point at a commit"),
            }
        }

        // Newest first; equal times fall back to name order
        dated.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        Ok(dated.into_iter().map(|(_, name)| name).collect())
    }

    fn merge_commits_since(&self, since: Option<&str>) -> Result<HashSet<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        if let Some(tag) = since {
            revwalk.hide(self.tag_commit_oid(tag)?)?;
        }

        let mut merges = HashSet::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            if commit.parent_count() > 1 {
                merges.insert(oid.to_string());
            }
        }

        Ok(merges)
    }
}
