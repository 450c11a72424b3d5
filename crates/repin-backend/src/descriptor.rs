/// Static description of one version-control backend: the binary to
/// invoke, the metadata entry that marks an existing checkout, and the
/// command templates the driver expands.
///
/// Templates are whitespace-tokenized strings with `{key}` placeholders;
/// `create_cmd` receives `{dir}`, `{repo}` and `{branch}`, `update_cmd`
/// receives `{tag}`, and `checkout_cmd` receives `{version}`.
#[derive(Debug)]
pub struct VcsBackend {
    pub name: &'static str,
    pub tool: &'static str,
    pub marker: &'static str,
    pub schemes: &'static [&'static str],
    pub suffix: &'static str,
    pub help: &'static str,

    pub create_cmd: &'static str,
    pub update_cmd: &'static str,
    pub checkout_cmd: &'static str,
}

impl VcsBackend {
    /// Whether this backend recognizes `locator` as one of its own, by
    /// URL scheme, scp-style `tool@host:path` form, or path suffix.
    #[must_use]
    pub fn handles(&self, locator: &str) -> bool {
        if let Some((scheme, _)) = locator.split_once("://") {
            let scheme = scheme.to_ascii_lowercase();
            return self.schemes.iter().any(|known| *known == scheme);
        }

        if let Some(rest) = locator.strip_prefix(self.tool)
            && let Some(host) = rest.strip_prefix('@')
            && host.contains(':')
        {
            return true;
        }

        locator.ends_with(self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::VcsBackend;

    static FAKE: VcsBackend = VcsBackend {
        name: "Fake",
        tool: "fake",
        marker: ".fake",
        schemes: &["fake", "https"],
        suffix: ".fake",
        help: "https://example.com/install",
        create_cmd: "create {repo} {dir} -b {branch}",
        update_cmd: "update {tag}",
        checkout_cmd: "switch {version}",
    };

    #[test]
    fn handles_matches_registered_schemes_case_insensitively() {
        assert!(FAKE.handles("https://example.com/repo"));
        assert!(FAKE.handles("FAKE://example.com/repo"));
        assert!(!FAKE.handles("svn://example.com/repo"));
    }

    #[test]
    fn handles_matches_scp_style_locators() {
        assert!(FAKE.handles("fake@example.com:owner/repo"));
        assert!(!FAKE.handles("fake@example.com"));
        assert!(!FAKE.handles("other@example.com:owner/repo"));
    }

    #[test]
    fn handles_matches_path_suffix() {
        assert!(FAKE.handles("/srv/mirrors/repo.fake"));
        assert!(!FAKE.handles("/srv/mirrors/repo"));
    }
}
