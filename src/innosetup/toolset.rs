//! Inno Setup toolset acquisition.
//!
//! Two strategies: Chocolatey (`choco install innosetup -y`), or downloading
//! the vendor installer and running it silently. The download strategy falls
//! back to Chocolatey once on any failure; the fallback's own error is the one
//! reported.

use crate::{
    cli::Reporter,
    error::{ActionError, Context, Result},
    settings::ActionSettings,
    utils::{
        http::Downloader,
        process::{CommandOutput, CommandRunner},
    },
};
use std::path::{Path, PathBuf};

/// Chocolatey executable.
const CHOCO: &str = "choco";

/// Chocolatey package providing the Inno Setup compiler.
const CHOCO_PACKAGE: &str = "innosetup";

/// Flags for an unattended Inno Setup install: no UI, no message boxes,
/// no reboot, no "This will install..." prompt.
pub const SILENT_INSTALL_ARGS: [&str; 4] = ["/VERYSILENT", "/SUPPRESSMSGBOXES", "/NORESTART", "/SP-"];

/// Make sure the Inno Setup compiler is installed.
pub async fn ensure_toolset<R, D, O>(
    settings: &ActionSettings,
    runner: &R,
    downloader: &D,
    reporter: &O,
) -> Result<()>
where
    R: CommandRunner,
    D: Downloader,
    O: Reporter,
{
    if !settings.install_latest {
        return install_with_chocolatey(runner, reporter).await;
    }

    if let Err(e) = install_latest(&settings.installer_url, runner, downloader, reporter).await {
        reporter.warning(&format!(
            "Download/install failed: {}. Falling back to Chocolatey.",
            e
        ));
        return install_with_chocolatey(runner, reporter).await;
    }

    Ok(())
}

/// Install the `innosetup` package non-interactively.
pub async fn install_with_chocolatey<R, O>(runner: &R, reporter: &O) -> Result<()>
where
    R: CommandRunner,
    O: Reporter,
{
    reporter.info("Installing Inno Setup via choco…");

    let args = vec![
        "install".to_string(),
        CHOCO_PACKAGE.to_string(),
        "-y".to_string(),
    ];
    let output = runner
        .run(Path::new(CHOCO), &args)
        .await
        .map_err(|e| ActionError::InstallFailed(e.to_string()))?;

    if !output.success() {
        return Err(ActionError::InstallFailed(chocolatey_diagnostic(
            &output, &args,
        )));
    }

    reporter.info("Installed.");
    Ok(())
}

/// Prefer the manager's own stderr; otherwise describe the failed command.
fn chocolatey_diagnostic(output: &CommandOutput, args: &[String]) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    format!(
        "Command failed: {} {} ({})",
        CHOCO,
        args.join(" "),
        output.status_description()
    )
}

/// Download the vendor installer and run it silently.
async fn install_latest<R, D, O>(
    installer_url: &str,
    runner: &R,
    downloader: &D,
    reporter: &O,
) -> Result<()>
where
    R: CommandRunner,
    D: Downloader,
    O: Reporter,
{
    let installer = installer_temp_path();

    reporter.info(&format!("Downloading Inno Setup from {}…", installer_url));
    let bytes = downloader.download(installer_url, &installer).await?;
    log::debug!("Installer saved to {} ({} bytes)", installer.display(), bytes);

    reporter.info(&format!(
        "Running installer silently: {}",
        installer.display()
    ));
    run_silent_installer(runner, &installer).await
}

/// Run a downloaded Inno Setup installer unattended.
pub async fn run_silent_installer<R: CommandRunner>(runner: &R, installer: &Path) -> Result<()> {
    let args: Vec<String> = SILENT_INSTALL_ARGS.iter().map(|s| s.to_string()).collect();
    let output = runner
        .run(installer, &args)
        .await
        .with_context(|| format!("running installer {}", installer.display()))?;

    if !output.success() {
        return Err(ActionError::SilentInstallFailed {
            path: installer.to_path_buf(),
            status: output.status_description(),
        });
    }

    Ok(())
}

/// Unique path in the temp directory for the downloaded installer.
///
/// The file is left behind after the run.
pub fn installer_temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("inno-setup-installer-{}.exe", uuid::Uuid::new_v4()))
}
