//! Command line argument parsing.
//!
//! The runner hands action inputs over as `INPUT_<NAME>` environment
//! variables; every input can also be given as a flag for local runs.

use crate::{
    error::CliError,
    settings::{
        ActionSettings, ProgramDirs, installer_url_or_default, parse_bool_input,
        parse_multiline_input,
    },
};
use clap::Parser;
use std::path::PathBuf;

/// Install Inno Setup and compile a script with iscc
#[derive(Parser, Debug, Clone)]
#[command(
    name = "kodegen_bundler_innosetup",
    version,
    about = "Install Inno Setup and compile a script with iscc",
    long_about = "Ensures the Inno Setup compiler is present on a Windows runner, then compiles
a script from the workspace with the given options.

Usage:
  kodegen_bundler_innosetup --path setup.iss
  kodegen_bundler_innosetup --path installer/app.iss --options \"/Qp
/DVersion=1.2.3\"
  kodegen_bundler_innosetup --path setup.iss --install-latest true

Exit code 0 = script compiled successfully."
)]
pub struct Args {
    /// Script to compile, relative to the workspace root
    #[arg(long, env = "INPUT_PATH", value_name = "PATH")]
    pub path: Option<String>,

    /// Extra iscc arguments, one per line
    #[arg(long, env = "INPUT_OPTIONS", value_name = "LINES", default_value = "")]
    pub options: String,

    /// Download the newest installer from the vendor instead of using Chocolatey ("true"/"false")
    #[arg(long, env = "INPUT_INSTALL_LATEST", value_name = "BOOL", default_value = "false")]
    pub install_latest: String,

    /// Installer download URL used with --install-latest
    #[arg(long, env = "INPUT_INSTALLER_URL", value_name = "URL")]
    pub installer_url: Option<String>,

    /// Workspace root containing the checked-out repository
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "DIR")]
    pub workspace: Option<String>,

    /// 32-bit program files directory
    #[arg(long, env = "ProgramFiles(x86)", value_name = "DIR", hide = true)]
    pub program_files_x86: Option<String>,

    /// Native program files directory
    #[arg(long, env = "ProgramFiles", value_name = "DIR", hide = true)]
    pub program_files: Option<String>,
}

/// Blank inputs count as unset.
fn non_empty_path(value: Option<&str>) -> Option<PathBuf> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl Args {
    /// Parse command line arguments.
    ///
    /// Help and version requests print and exit. Any other rejection is
    /// returned so it is reported like every other failure.
    pub fn try_parse_args() -> Result<Self, CliError> {
        Self::try_parse().map_err(|e| {
            if !e.use_stderr() {
                e.exit()
            }
            invalid_arguments(&e)
        })
    }
}

/// First line of clap's rendered error, without its `error:` tag.
fn invalid_arguments(error: &clap::Error) -> CliError {
    let rendered = error.to_string();
    let reason = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error:")
        .trim()
        .to_string();
    CliError::InvalidArguments { reason }
}

impl From<&Args> for ActionSettings {
    fn from(args: &Args) -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            workspace: non_empty_path(args.workspace.as_deref()),
            script: non_empty_path(args.path.as_deref()).unwrap_or_default(),
            options: parse_multiline_input(&args.options),
            install_latest: parse_bool_input(&args.install_latest),
            installer_url: installer_url_or_default(args.installer_url.as_deref()),
            program_dirs: ProgramDirs {
                program_files_x86: non_empty_path(args.program_files_x86.as_deref()),
                program_files: non_empty_path(args.program_files.as_deref()),
            },
        }
    }
}
