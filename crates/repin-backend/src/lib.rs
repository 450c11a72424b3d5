mod descriptor;
mod diagnostics;
mod error;
mod version;

pub use descriptor::VcsBackend;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::VcsError;
pub use version::{COMMIT_PREFIX, DEFAULT_BRANCH, RepoVersion};
