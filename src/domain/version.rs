use crate::error::{DrafterError, Result};
use std::fmt;
use std::str::FromStr;

/// Tag returned by [`find_latest_tag`] when no tag parses as a version.
pub const NO_TAG: &str = "0.0.0";

const POST_MARKER: &str = ".post";

/// Semantic version with an optional post-release counter (`1.2.3.post4`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub post: Option<u64>,
}

impl SemanticVersion {
    /// Create a new version without a post-release counter
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            post: None,
        }
    }

    /// Same base version with the given post-release counter
    pub fn with_post(self, post: u64) -> Self {
        SemanticVersion {
            post: Some(post),
            ..self
        }
    }

    /// Parse a version from a tag string (e.g. "v1.2.3.post4").
    ///
    /// A single leading `v` is stripped. Everything before `.post` must be a
    /// strict `MAJOR.MINOR.PATCH` triple; everything after it must be a
    /// positive decimal counter.
    pub fn parse(tag: &str) -> Result<Self> {
        let cleaned = strip_v(tag);
        let (base, counter) = split_post(cleaned);

        let version = parse_base(base)?;
        match counter {
            None => Ok(version),
            Some(digits) => Ok(version.with_post(parse_post_counter(tag, digits)?)),
        }
    }

    /// Apply a bump and return the resulting version.
    ///
    /// Major, minor and patch bumps drop any post-release counter. A post bump
    /// keeps the base version and increments the counter, starting at 1.
    ///
    /// Fails with [`DrafterError::Parse`] if the incremented component does
    /// not fit in a `u64`.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let bumped = match kind {
            BumpKind::Major => SemanticVersion::new(self.increment(self.major, kind)?, 0, 0),
            BumpKind::Minor => {
                SemanticVersion::new(self.major, self.increment(self.minor, kind)?, 0)
            }
            BumpKind::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.increment(self.patch, kind)?,
            ),
            BumpKind::Post => {
                let next = match self.post {
                    Some(n) => self.increment(n, kind)?,
                    None => 1,
                };
                SemanticVersion::new(self.major, self.minor, self.patch).with_post(next)
            }
        };
        Ok(bumped)
    }

    fn increment(&self, component: u64, kind: BumpKind) -> Result<u64> {
        component.checked_add(1).ok_or_else(|| {
            DrafterError::parse(format!(
                "Cannot apply {} bump to '{}' - component overflows",
                kind, self
            ))
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(post) = self.post {
            write!(f, "{}{}", POST_MARKER, post)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = DrafterError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

/// Which component of the version a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Post,
}

impl BumpKind {
    /// All kinds, highest precedence first
    pub const PRECEDENCE: [BumpKind; 4] = [
        BumpKind::Major,
        BumpKind::Minor,
        BumpKind::Patch,
        BumpKind::Post,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Post => "post",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = DrafterError;

    fn from_str(s: &str) -> Result<Self> {
        BumpKind::PRECEDENCE
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DrafterError::UnknownBumpKind(s.to_string()))
    }
}

/// Returns the first tag whose base portion is a valid version.
///
/// `tags` must already be ordered newest-created first. Falls back to
/// [`NO_TAG`] when nothing parses.
pub fn find_latest_tag<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for tag in tags {
        let tag = tag.as_ref();
        let (base, _) = split_post(strip_v(tag));
        if parse_base(base).is_ok() {
            return tag.to_string();
        }
    }
    NO_TAG.to_string()
}

fn strip_v(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

fn split_post(cleaned: &str) -> (&str, Option<&str>) {
    match cleaned.split_once(POST_MARKER) {
        Some((base, counter)) => (base, Some(counter)),
        None => (cleaned, None),
    }
}

fn parse_base(base: &str) -> Result<SemanticVersion> {
    let parsed = semver::Version::parse(base).map_err(|e| {
        DrafterError::parse(format!(
            "Invalid version '{}' - expected MAJOR.MINOR.PATCH ({})",
            base, e
        ))
    })?;

    if !parsed.pre.is_empty() || !parsed.build.is_empty() {
        return Err(DrafterError::parse(format!(
            "Invalid version '{}' - pre-release and build metadata are not supported",
            base
        )));
    }

    Ok(SemanticVersion::new(parsed.major, parsed.minor, parsed.patch))
}

fn parse_post_counter(tag: &str, digits: &str) -> Result<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DrafterError::parse(format!(
            "Invalid post-release suffix in '{}' - expected .postN",
            tag
        )));
    }

    match digits.parse::<u64>() {
        Ok(0) => Err(DrafterError::parse(format!(
            "Invalid post-release counter in '{}' - must be at least 1",
            tag
        ))),
        Ok(n) => Ok(n),
        Err(e) => Err(DrafterError::parse(format!(
            "Invalid post-release counter in '{}': {}",
            tag, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumped(tag: &str, kind: BumpKind) -> String {
        SemanticVersion::parse(tag)
            .unwrap()
            .bump(kind)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_version_parse() {
        let v = SemanticVersion::parse("v1.2.3").unwrap();
        assert_eq!(v, SemanticVersion::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_with_post() {
        let v = SemanticVersion::parse("v1.2.3.post4").unwrap();
        assert_eq!(v, SemanticVersion::new(1, 2, 3).with_post(4));
    }

    #[test]
    fn test_version_parse_strips_only_one_v() {
        assert!(SemanticVersion::parse("vv1.2.3").is_err());
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(SemanticVersion::parse("1.2").is_err());
        assert!(SemanticVersion::parse("v1.2.3.4").is_err());
        assert!(SemanticVersion::parse("release-1.2.3").is_err());
        assert!(SemanticVersion::parse("1.2.3-rc.1").is_err());
        assert!(SemanticVersion::parse("1.2.3+build5").is_err());
        assert!(SemanticVersion::parse("").is_err());
    }

    #[test]
    fn test_version_parse_invalid_post_suffix() {
        assert!(matches!(
            SemanticVersion::parse("1.2.3.post"),
            Err(DrafterError::Parse(_))
        ));
        assert!(SemanticVersion::parse("1.2.3.postx").is_err());
        assert!(SemanticVersion::parse("1.2.3.post0").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(SemanticVersion::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            SemanticVersion::new(1, 2, 3).with_post(7).to_string(),
            "1.2.3.post7"
        );
    }

    #[test]
    fn test_version_from_str() {
        let v: SemanticVersion = "0.0.0".parse().unwrap();
        assert_eq!(v, SemanticVersion::new(0, 0, 0));
    }

    #[test]
    fn test_version_bump_major_minor_patch() {
        assert_eq!(bumped("1.2.3", BumpKind::Major), "2.0.0");
        assert_eq!(bumped("1.2.3", BumpKind::Minor), "1.3.0");
        assert_eq!(bumped("1.2.3", BumpKind::Patch), "1.2.4");
    }

    #[test]
    fn test_version_bump_drops_post_suffix() {
        assert_eq!(bumped("1.2.3.post5", BumpKind::Patch), "1.2.4");
        assert_eq!(bumped("1.2.3.post5", BumpKind::Minor), "1.3.0");
        assert_eq!(bumped("v1.2.3.post5", BumpKind::Major), "2.0.0");
    }

    #[test]
    fn test_version_bump_post() {
        assert_eq!(bumped("1.2.3", BumpKind::Post), "1.2.3.post1");
        assert_eq!(bumped("1.2.3.post2", BumpKind::Post), "1.2.3.post3");
        assert_eq!(bumped("v0.0.0", BumpKind::Post), "0.0.0.post1");
    }

    #[test]
    fn test_version_bump_overflow_is_error() {
        let max = u64::MAX;
        let patch = SemanticVersion::parse(&format!("v1.2.{}", max)).unwrap();
        assert!(matches!(
            patch.bump(BumpKind::Patch),
            Err(DrafterError::Parse(_))
        ));
        // Other components are unaffected
        assert_eq!(patch.bump(BumpKind::Minor).unwrap().to_string(), "1.3.0");

        let post = SemanticVersion::parse(&format!("1.2.3.post{}", max)).unwrap();
        assert!(matches!(
            post.bump(BumpKind::Post),
            Err(DrafterError::Parse(_))
        ));
        assert_eq!(post.bump(BumpKind::Patch).unwrap().to_string(), "1.2.4");

        let major = SemanticVersion::new(max, 0, 0);
        assert!(major.bump(BumpKind::Major).is_err());
        let minor = SemanticVersion::new(0, max, 0);
        assert!(minor.bump(BumpKind::Minor).is_err());
    }

    #[test]
    fn test_version_bump_does_not_mutate() {
        let v = SemanticVersion::new(1, 2, 3);
        let _ = v.bump(BumpKind::Major).unwrap();
        assert_eq!(v, SemanticVersion::new(1, 2, 3));
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("post".parse::<BumpKind>().unwrap(), BumpKind::Post);
        assert!(matches!(
            "Major".parse::<BumpKind>(),
            Err(DrafterError::UnknownBumpKind(_))
        ));
        assert!("prerelease".parse::<BumpKind>().is_err());
    }

    #[test]
    fn test_bump_kind_display_round_trips() {
        for kind in BumpKind::PRECEDENCE {
            assert_eq!(kind.to_string().parse::<BumpKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_find_latest_tag_first_parseable_wins() {
        let tags = ["not-a-version", "v1.2.3", "v1.1.0"];
        assert_eq!(find_latest_tag(tags), "v1.2.3");
    }

    #[test]
    fn test_find_latest_tag_respects_input_order() {
        let tags = ["v1.1.0", "v1.2.3"];
        assert_eq!(find_latest_tag(tags), "v1.1.0");
    }

    #[test]
    fn test_find_latest_tag_accepts_post_tags() {
        let tags = vec!["nightly".to_string(), "v2.0.0.post3".to_string()];
        assert_eq!(find_latest_tag(&tags), "v2.0.0.post3");
    }

    #[test]
    fn test_find_latest_tag_none_parse() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(find_latest_tag(empty), NO_TAG);
        assert_eq!(find_latest_tag(["latest", "release-1", "v1.2"]), "0.0.0");
    }
}
