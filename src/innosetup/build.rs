//! Inno Setup script compilation.
//!
//! Runs iscc.exe against a script and relays its buffered output.

use super::utils;
use crate::{
    cli::Reporter,
    error::{ActionError, Result},
    utils::process::CommandRunner,
};
use std::path::Path;

/// Line logged after a successful compile.
pub const SUCCESS_MESSAGE: &str = "Inno Setup script compiled successfully.";

/// Compile `script` with iscc, passing each option as its own argument.
///
/// Captured stdout is relayed as log lines and stderr as error lines, both
/// before the exit status is examined.
pub async fn run_iscc<R, O>(
    iscc: &Path,
    script: &Path,
    options: &[String],
    runner: &R,
    reporter: &O,
) -> Result<()>
where
    R: CommandRunner,
    O: Reporter,
{
    reporter.info("Running iscc…");

    let mut args = Vec::with_capacity(options.len() + 1);
    args.push(script.display().to_string());
    args.extend(utils::escape_options(options));

    let output = runner
        .run(iscc, &args)
        .await
        .map_err(|e| ActionError::ExecutionFailed(e.to_string()))?;

    if !output.stdout.is_empty() {
        reporter.info(output.stdout.trim_end());
    }
    if !output.stderr.is_empty() {
        reporter.error(output.stderr.trim_end());
    }

    if !output.success() {
        let stderr = output.stderr.trim_end();
        let reason = if stderr.is_empty() {
            format!("iscc exited with {}", output.status_description())
        } else {
            stderr.to_string()
        };
        return Err(ActionError::ExecutionFailed(reason));
    }

    reporter.success(SUCCESS_MESSAGE);
    Ok(())
}
