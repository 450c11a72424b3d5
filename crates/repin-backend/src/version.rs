use std::fmt;

/// Branch context assumed when a version pins a bare commit.
pub const DEFAULT_BRANCH: &str = "master";

/// Prefix marking the commit form of a version identifier.
pub const COMMIT_PREFIX: &str = "sha:";

/// A parsed version identifier.
///
/// The wire form is either `sha:<id>`, pinning one immutable commit, or
/// a bare reference name naming a movable tag or branch. Identifiers
/// are parsed fresh on every operation and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoVersion {
    Tag(String),
    Commit(String),
}

impl RepoVersion {
    /// Parses a raw version string. Any input is accepted; no syntax
    /// checking is applied to the tag name or commit id.
    #[must_use]
    pub fn parse(version: &str) -> Self {
        match version.strip_prefix(COMMIT_PREFIX) {
            Some(commit) => Self::Commit(commit.to_string()),
            None => Self::Tag(version.to_string()),
        }
    }

    /// The branch to clone: the tag itself, or [`DEFAULT_BRANCH`] when
    /// only a commit is pinned.
    #[must_use]
    pub fn branch(&self) -> &str {
        match self {
            Self::Tag(tag) => tag,
            Self::Commit(_) => DEFAULT_BRANCH,
        }
    }

    /// The pinned commit id, if the commit form was given.
    #[must_use]
    pub fn commit(&self) -> Option<&str> {
        match self {
            Self::Commit(commit) => Some(commit),
            Self::Tag(_) => None,
        }
    }
}

impl fmt::Display for RepoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.write_str(tag),
            Self::Commit(commit) => write!(f, "{COMMIT_PREFIX}{commit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_BRANCH, RepoVersion};

    #[test]
    fn parse_commit_form_strips_the_prefix() {
        let version = RepoVersion::parse("sha:abc123");

        assert_eq!(version, RepoVersion::Commit("abc123".to_string()));
        assert_eq!(version.branch(), DEFAULT_BRANCH);
        assert_eq!(version.commit(), Some("abc123"));
    }

    #[test]
    fn parse_tag_form_keeps_the_input_verbatim() {
        let version = RepoVersion::parse("v1.2.0");

        assert_eq!(version, RepoVersion::Tag("v1.2.0".to_string()));
        assert_eq!(version.branch(), "v1.2.0");
        assert_eq!(version.commit(), None);
    }

    #[test]
    fn parse_accepts_arbitrary_strings() {
        assert_eq!(
            RepoVersion::parse(""),
            RepoVersion::Tag(String::new())
        );
        assert_eq!(
            RepoVersion::parse("sha:"),
            RepoVersion::Commit(String::new())
        );
        assert_eq!(
            RepoVersion::parse("shaft"),
            RepoVersion::Tag("shaft".to_string())
        );
    }

    #[test]
    fn display_round_trips_the_wire_form() {
        assert_eq!(RepoVersion::parse("sha:deadbeef").to_string(), "sha:deadbeef");
        assert_eq!(RepoVersion::parse("release-2").to_string(), "release-2");
    }
}
