//! Child process execution.
//!
//! Every external program the action touches (package manager, silent
//! installer, `where`, iscc) goes through [`CommandRunner`], so the pipeline
//! can be driven by a scripted runner in tests.

use crate::error::{ActionError, Result};
use std::{ffi::OsStr, future::Future, path::Path, process::Stdio};

/// Buffered result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with code zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human readable exit status, e.g. `exit code 2`.
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {code}"),
            None => "termination by signal".to_string(),
        }
    }
}

/// Runs a program to completion with discrete arguments.
///
/// Arguments are never joined into a shell string.
pub trait CommandRunner {
    /// Run `program` with `args`, buffering stdout and stderr until exit.
    ///
    /// Returns `Err` only when the process could not be started; a non-zero
    /// exit is reported through [`CommandOutput::code`].
    fn run(
        &self,
        program: &Path,
        args: &[String],
    ) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// Production runner backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        log::debug!("Executing {} {}", program.display(), args.join(" "));

        let output = tokio::process::Command::new(program)
            .args(args.iter().map(OsStr::new))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|error| ActionError::CommandFailed {
                command: program.display().to_string(),
                error,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
