use std::process::ExitStatus;
use thiserror::Error;

/// Failures surfaced by the driver and runner. Nothing is retried or
/// swallowed; diagnostics written to the sink are a side channel and
/// the returned `Result` is the report.
#[derive(Debug, Error)]
pub enum VcsError {
    /// The backend's executable could not be resolved on `PATH`. No
    /// subprocess was spawned.
    #[error("{tool} not found on PATH")]
    ToolNotFound {
        tool: &'static str,
        #[source]
        source: which::Error,
    },

    /// The tool ran and exited non-zero.
    #[error("{tool} failed: {status}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
    },

    /// The OS refused to spawn the tool.
    #[error("failed to spawn {tool}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A `{key}` placeholder in a command template had no binding at
    /// expansion time. Raised before anything is spawned.
    #[error("unresolved placeholder {{{key}}} in command template `{template}`")]
    UnresolvedPlaceholder { key: String, template: String },

    /// No registered backend claims the repository locator.
    #[error("no version control backend recognizes {locator}")]
    UnsupportedLocator { locator: String },
}
