use std::io::{self, Write};
use std::path::Path;

use crate::descriptor::VcsBackend;

/// Destination for failure diagnostics produced while driving the
/// external tool. Implementations receive best-effort human-readable
/// text; errors are still reported through returned `Result`s.
pub trait DiagnosticSink: Send + Sync {
    /// The backend's executable could not be resolved on `PATH`.
    fn missing_tool(&self, backend: &VcsBackend);

    /// A spawned command exited non-zero. `output` is the combined
    /// stdout and stderr captured from the child.
    fn command_failed(&self, dir: &Path, tool: &str, args: &[String], output: &[u8]);
}

/// Default sink: one-line messages through the `log` facade plus the
/// raw captured output verbatim on stderr. Plain text only, never
/// stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn missing_tool(&self, backend: &VcsBackend) {
        log::error!(
            "missing {} command ({}); see {}",
            backend.tool,
            backend.name,
            backend.help
        );
    }

    fn command_failed(&self, dir: &Path, tool: &str, args: &[String], output: &[u8]) {
        log::error!("# cd {}; {} {}", dir.display(), tool, args.join(" "));
        let _ = io::stderr().write_all(output);
    }
}
