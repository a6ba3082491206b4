use crate::config::BumpLabelGroups;
use crate::domain::{BumpKind, PullRequest};

/// Which bump kinds were triggered by at least one pull request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub post: bool,
}

impl BumpFlags {
    pub fn is_set(&self, kind: BumpKind) -> bool {
        match kind {
            BumpKind::Major => self.major,
            BumpKind::Minor => self.minor,
            BumpKind::Patch => self.patch,
            BumpKind::Post => self.post,
        }
    }

    fn set(&mut self, kind: BumpKind) {
        match kind {
            BumpKind::Major => self.major = true,
            BumpKind::Minor => self.minor = true,
            BumpKind::Patch => self.patch = true,
            BumpKind::Post => self.post = true,
        }
    }

    /// Highest-precedence triggered kind, if any
    pub fn highest(&self) -> Option<BumpKind> {
        BumpKind::PRECEDENCE
            .into_iter()
            .find(|kind| self.is_set(*kind))
    }
}

/// Decides the bump kind for a release from pull request labels
pub struct BumpClassifier {
    groups: BumpLabelGroups,
}

impl BumpClassifier {
    /// Create a new classifier over the configured label groups
    pub fn new(groups: BumpLabelGroups) -> Self {
        BumpClassifier { groups }
    }

    pub fn groups(&self) -> &BumpLabelGroups {
        &self.groups
    }

    /// Evaluate every pull request against every bump kind
    pub fn triggered(&self, pull_requests: &[PullRequest]) -> BumpFlags {
        let mut flags = BumpFlags::default();

        for pr in pull_requests {
            for kind in BumpKind::PRECEDENCE {
                if pr.has_any_label(self.groups.labels_for(kind)) {
                    flags.set(kind);
                }
            }
        }

        flags
    }

    /// The highest-precedence triggered kind, or the configured default
    pub fn classify(&self, pull_requests: &[PullRequest]) -> BumpKind {
        let flags = self.triggered(pull_requests);
        tracing::debug!(?flags, "bump decision flags");
        flags.highest().unwrap_or(self.groups.default)
    }
}
