use repin_backend::VcsBackend;

/// How to drive Git.
pub static GIT: VcsBackend = VcsBackend {
    name: "Git",
    tool: "git",
    marker: ".git",
    schemes: &["git", "git+https", "git+ssh", "http", "https", "ssh", "file"],
    suffix: ".git",
    help: "https://git-scm.com/downloads",

    create_cmd: "clone {repo} {dir} -b {branch}",
    update_cmd: "checkout -f tags/{tag}",
    checkout_cmd: "checkout {version}",
};

static BACKENDS: &[&VcsBackend] = &[&GIT];

/// Every backend the driver knows how to operate.
#[must_use]
pub fn backends() -> &'static [&'static VcsBackend] {
    BACKENDS
}

/// Looks a backend up by the name of its executable. Absence is an
/// ordinary answer, not an error.
#[must_use]
pub fn by_tool(tool: &str) -> Option<&'static VcsBackend> {
    BACKENDS.iter().copied().find(|backend| backend.tool == tool)
}

/// Picks the backend that claims `locator`, dispatching on URL scheme,
/// scp-style form, or path suffix.
#[must_use]
pub fn by_locator(locator: &str) -> Option<&'static VcsBackend> {
    BACKENDS
        .iter()
        .copied()
        .find(|backend| backend.handles(locator))
}

#[cfg(test)]
mod tests {
    use super::{GIT, backends, by_locator, by_tool};

    #[test]
    fn by_tool_finds_git() {
        let backend = by_tool("git").expect("git should be registered");
        assert_eq!(backend.name, "Git");
        assert_eq!(backend.marker, ".git");
    }

    #[test]
    fn by_tool_misses_unknown_tools() {
        assert!(by_tool("svn").is_none());
        assert!(by_tool("hg").is_none());
    }

    #[test]
    fn by_locator_claims_common_git_locators() {
        for locator in [
            "https://example.com/r.git",
            "https://example.com/r",
            "git://example.com/r",
            "git+ssh://example.com/r",
            "git@example.com:owner/r.git",
            "/srv/mirrors/r.git",
        ] {
            assert!(
                by_locator(locator).is_some(),
                "expected git to claim {locator}"
            );
        }
    }

    #[test]
    fn by_locator_rejects_unknown_schemes() {
        assert!(by_locator("svn://example.com/r").is_none());
        assert!(by_locator("ftp://example.com/r").is_none());
    }

    #[test]
    fn git_templates_cover_every_operation() {
        assert!(GIT.create_cmd.contains("{repo}"));
        assert!(GIT.create_cmd.contains("{dir}"));
        assert!(GIT.create_cmd.contains("{branch}"));
        assert!(GIT.update_cmd.contains("{tag}"));
        assert!(GIT.checkout_cmd.contains("{version}"));
        assert_eq!(backends().len(), 1);
    }
}
