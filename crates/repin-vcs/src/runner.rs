use std::path::Path;

use log::{debug, info, trace};
use repin_backend::VcsError;
use tokio::process::Command;

use crate::driver::Driver;

impl Driver {
    /// Runs `template` in `dir`, reporting diagnostics through the sink
    /// on failure and discarding the command's output.
    pub async fn run(
        &self,
        dir: &Path,
        template: &str,
        subs: &[(&str, &str)],
    ) -> Result<(), VcsError> {
        self.run_raw(dir, template, subs, true).await.map(drop)
    }

    /// Like [`run`](Self::run) but stays silent when the command fails.
    pub async fn run_quiet(
        &self,
        dir: &Path,
        template: &str,
        subs: &[(&str, &str)],
    ) -> Result<(), VcsError> {
        self.run_raw(dir, template, subs, false).await.map(drop)
    }

    /// Like [`run`](Self::run) but returns the command's combined
    /// stdout and stderr on success.
    pub async fn run_output(
        &self,
        dir: &Path,
        template: &str,
        subs: &[(&str, &str)],
    ) -> Result<Vec<u8>, VcsError> {
        self.run_raw(dir, template, subs, true).await
    }

    async fn run_raw(
        &self,
        dir: &Path,
        template: &str,
        subs: &[(&str, &str)],
        verbose: bool,
    ) -> Result<Vec<u8>, VcsError> {
        let args = expand_template(template, subs)?;
        let backend = self.backend();

        if let Err(source) = which::which(backend.tool) {
            self.sink.missing_tool(backend);
            return Err(VcsError::ToolNotFound {
                tool: backend.tool,
                source,
            });
        }

        info!(
            "running {} {} in {}",
            backend.tool,
            args.join(" "),
            dir.display()
        );

        let output = Command::new(backend.tool)
            .args(&args)
            .current_dir(dir)
            .output()
            .await
            .map_err(|source| VcsError::Spawn {
                tool: backend.tool,
                source,
            })?;

        trace!("{} exited with {}", backend.tool, output.status);

        let mut buf = output.stdout;
        buf.extend_from_slice(&output.stderr);

        if output.status.success() {
            debug!("{} succeeded, captured {} bytes", backend.tool, buf.len());
            Ok(buf)
        } else {
            if verbose {
                self.sink.command_failed(dir, backend.tool, &args, &buf);
            }
            Err(VcsError::ToolFailed {
                tool: backend.tool,
                status: output.status,
            })
        }
    }
}

/// Splits `template` into whitespace-separated tokens, then substitutes
/// `{key}` placeholders inside each token. Splitting happens first so a
/// substituted value can never introduce new argument boundaries.
///
/// A well-formed placeholder with no binding is a configuration error;
/// stray braces that never close are kept literal.
pub(crate) fn expand_template(
    template: &str,
    subs: &[(&str, &str)],
) -> Result<Vec<String>, VcsError> {
    template
        .split_whitespace()
        .map(|token| {
            expand_token(token, subs).map_err(|key| VcsError::UnresolvedPlaceholder {
                key,
                template: template.to_string(),
            })
        })
        .collect()
}

fn expand_token(token: &str, subs: &[(&str, &str)]) -> Result<String, String> {
    let mut out = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match subs.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => return Err(key.to_string()),
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}
