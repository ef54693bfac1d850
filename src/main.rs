//! Kodegen Bundler Inno Setup - compile Inno Setup scripts on CI runners.
//!
//! Installs the Inno Setup toolchain when needed, then runs iscc.exe on the
//! requested script. Any failure is reported to the runner and exits with 1.

use kodegen_bundler_innosetup::{OutputManager, Reporter, cli};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let output = OutputManager::from_env();

    if let Err(e) = cli::run(&output).await {
        output.failure(&e.failure_message());
        process::exit(1);
    }
}
