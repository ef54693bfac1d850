//! Inno Setup provisioning and compilation.
//!
//! # Process
//!
//! 1. Validate the runner environment
//! 2. Acquire the toolset (Chocolatey, or vendor installer with Chocolatey fallback)
//! 3. Locate iscc.exe
//! 4. Compile the script with the pass-through options
//!
//! Each step short-circuits the rest on failure.
//!
//! # Module Organization
//!
//! - `toolset` - installer download, silent install, Chocolatey install
//! - `locate` - iscc.exe discovery
//! - `build` - iscc execution and output relay
//! - `utils` - option escaping

mod build;
mod locate;
mod toolset;
mod utils;

pub use build::{SUCCESS_MESSAGE, run_iscc};
pub use locate::{ISCC_EXE, PRODUCT_DIRS, candidate_paths, locate_iscc};
pub use toolset::{
    SILENT_INSTALL_ARGS, ensure_toolset, install_with_chocolatey, installer_temp_path,
    run_silent_installer,
};
pub use utils::{escape_option, escape_options, script_path};

use crate::{
    cli::Reporter,
    environment::validate_environment,
    error::{CliError, Result},
    settings::ActionSettings,
    utils::{http::Downloader, process::CommandRunner},
};

/// Runs the action stages against one set of settings.
#[derive(Debug)]
pub struct InnoSetupAction<'a, R, D, O> {
    settings: &'a ActionSettings,
    runner: &'a R,
    downloader: &'a D,
    reporter: &'a O,
}

impl<'a, R, D, O> InnoSetupAction<'a, R, D, O>
where
    R: CommandRunner,
    D: Downloader,
    O: Reporter,
{
    /// Create an action runner
    pub fn new(
        settings: &'a ActionSettings,
        runner: &'a R,
        downloader: &'a D,
        reporter: &'a O,
    ) -> Self {
        Self {
            settings,
            runner,
            downloader,
            reporter,
        }
    }

    /// Run every stage in order.
    pub async fn run(&self) -> Result<()> {
        let workspace = validate_environment(self.settings).await?;

        if self.settings.script.as_os_str().is_empty() {
            return Err(CliError::MissingInput {
                input: "path".to_string(),
            }
            .into());
        }

        ensure_toolset(self.settings, self.runner, self.downloader, self.reporter).await?;

        let iscc = locate_iscc(&self.settings.program_dirs, self.runner).await?;

        let script = script_path(&workspace, &self.settings.script);
        log::info!("Compiling {} with {}", script.display(), iscc.display());

        run_iscc(
            &iscc,
            &script,
            &self.settings.options,
            self.runner,
            self.reporter,
        )
        .await
    }
}
