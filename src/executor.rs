//! External command execution.
//!
//! The pipeline never spawns processes itself; it hands each command to a
//! [`CommandExecutor`]. [`SystemExecutor`] is the real one used by the CLI.

use crate::error::StepFailure;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs one external command to completion in a given directory.
pub trait CommandExecutor {
    /// Run `program` with `args` in `dir`, returning once the child exits.
    ///
    /// # Errors
    /// Fails if the program cannot be found or started, or exits non-zero.
    fn run(&mut self, program: &str, args: &[String], dir: &Path) -> Result<(), StepFailure>;
}

/// Spawns real processes with stdin, stdout and stderr inherited from the
/// terminal, so the user sees the tool's own output live.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&mut self, program: &str, args: &[String], dir: &Path) -> Result<(), StepFailure> {
        // Resolving through PATH ourselves picks up npm.cmd / npx.cmd on Windows
        let resolved = which::which(program).map_err(|_| StepFailure::NotFound {
            program: program.to_string(),
        })?;
        tracing::debug!(program = %resolved.display(), ?args, dir = %dir.display(), "spawning");

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| StepFailure::Spawn {
                program: program.to_string(),
                source,
            })?;

        tracing::trace!(%status, "child exited");
        if !status.success() {
            return Err(StepFailure::Status {
                program: program.to_string(),
                status,
            });
        }

        Ok(())
    }
}

/// Render a command the way a user would type it, for logs and `--inspect`.
#[must_use]
pub fn display_command(program: &str, args: &[String]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(program.to_string());
    for arg in args {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            parts.push(format!("\"{}\"", arg.replace('"', "\\\"")));
        } else {
            parts.push(arg.clone());
        }
    }
    parts.join(" ")
}
