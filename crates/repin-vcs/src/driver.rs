use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use repin_backend::{DiagnosticSink, LogSink, RepoVersion, VcsBackend, VcsError};

use crate::registry;

/// Stateless operations over one checkout directory, parameterized by a
/// backend descriptor. Side effects happen only through the filesystem
/// and the spawned tool; each call is independent.
#[derive(Clone)]
pub struct Driver {
    backend: &'static VcsBackend,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver").field("backend", &self.backend).finish_non_exhaustive()
    }
}

impl Driver {
    #[must_use]
    pub fn new(backend: &'static VcsBackend) -> Self {
        Self {
            backend,
            sink: Arc::new(LogSink),
        }
    }

    /// Driver for the backend whose executable is named `tool`.
    #[must_use]
    pub fn for_tool(tool: &str) -> Option<Self> {
        registry::by_tool(tool).map(Self::new)
    }

    /// Driver for the backend that claims `locator`.
    pub fn for_locator(locator: &str) -> Result<Self, VcsError> {
        registry::by_locator(locator)
            .map(Self::new)
            .ok_or_else(|| VcsError::UnsupportedLocator {
                locator: locator.to_string(),
            })
    }

    /// Replaces the sink failure diagnostics are reported to.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn backend(&self) -> &'static VcsBackend {
        self.backend
    }

    /// Whether `dir` already holds a checkout of this backend's kind.
    ///
    /// Only a clean "no such entry" answer counts as absent. Any other
    /// failure to stat the marker folds into `true`, so an unreadable
    /// checkout is never cloned over.
    #[must_use]
    pub fn exists(&self, dir: &Path) -> bool {
        match std::fs::symlink_metadata(dir.join(self.backend.marker)) {
            Ok(_) => true,
            Err(err) => err.kind() != ErrorKind::NotFound,
        }
    }

    /// Clones `repo` at `version` into `dir`. The parent of `dir` must
    /// exist and `dir` itself must not; the tool enforces both. A
    /// failed create can leave a partially populated `dir` behind for
    /// the caller to clean up.
    pub async fn create(&self, dir: &Path, repo: &str, version: &str) -> Result<(), VcsError> {
        let version = RepoVersion::parse(version);
        debug!(
            "creating {} checkout of {repo} in {}",
            self.backend.name,
            dir.display()
        );

        let dir_str = dir.to_string_lossy();
        self.run(
            Path::new("."),
            self.backend.create_cmd,
            &[
                ("dir", dir_str.as_ref()),
                ("repo", repo),
                ("branch", version.branch()),
            ],
        )
        .await?;

        if let Some(commit) = version.commit() {
            return self
                .run(dir, self.backend.checkout_cmd, &[("version", commit)])
                .await;
        }

        Ok(())
    }

    /// Switches the checkout in `dir` to `version`: a pinned commit
    /// checks out that exact revision, a tag moves to the tip of the
    /// tag. The working tree is mutated in place.
    pub async fn checkout(&self, dir: &Path, version: &str) -> Result<(), VcsError> {
        match RepoVersion::parse(version) {
            RepoVersion::Commit(commit) => {
                self.run(dir, self.backend.checkout_cmd, &[("version", commit.as_str())])
                    .await
            }
            RepoVersion::Tag(tag) => {
                self.run(dir, self.backend.update_cmd, &[("tag", tag.as_str())])
                    .await
            }
        }
    }
}
