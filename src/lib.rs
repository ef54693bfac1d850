//! Inno Setup provisioning and compilation for CI runners.
//!
//! This library backs a GitHub Actions step that:
//! - Validates the Windows runner and checked-out workspace
//! - Installs Inno Setup via Chocolatey, or downloads the vendor installer
//!   and runs it silently with Chocolatey as fallback
//! - Locates `iscc.exe` in the well-known install directories or on PATH
//! - Compiles a script with pass-through options and relays iscc's output
//!
//! It can be used both as a CLI tool and as a library dependency; the
//! process runner, downloader and log sink are traits so the pipeline can be
//! driven without touching the host.

pub mod cli;
pub mod environment;
pub mod error;
pub mod innosetup;
pub mod settings;
pub mod utils;

// Re-export commonly used types
pub use cli::{OutputManager, Reporter};
pub use error::{ActionError, CliError, Result};
pub use innosetup::InnoSetupAction;
pub use settings::{ActionSettings, ProgramDirs};
