//! Command line interface for the Inno Setup action.
//!
//! Parses the action inputs, wires the production process runner and HTTP
//! downloader into [`InnoSetupAction`], and runs it.

mod args;
mod output;

pub use args::Args;
pub use output::{OutputManager, Reporter, workflow_command};

use crate::{
    error::Result,
    innosetup::InnoSetupAction,
    settings::ActionSettings,
    utils::{http::HttpDownloader, process::TokioCommandRunner},
};

/// Main CLI entry point
pub async fn run(output: &OutputManager) -> Result<()> {
    let args = Args::try_parse_args()?;
    let settings = ActionSettings::from(&args);
    execute(&settings, output).await
}

/// Run the action with production collaborators.
pub async fn execute(settings: &ActionSettings, output: &OutputManager) -> Result<()> {
    log::debug!("Action settings: {:?}", settings);

    let runner = TokioCommandRunner;
    let downloader = HttpDownloader::new()?;

    InnoSetupAction::new(settings, &runner, &downloader, output)
        .run()
        .await
}
