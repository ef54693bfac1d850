//! Error types for the Inno Setup action.
//!
//! Every fatal condition of the run funnels into [`ActionError`]. The `Display`
//! output of each variant is the exact failure message reported to the runner,
//! so wording changes here are user-visible.
//!
//! # Example
//!
//! ```no_run
//! # use std::path::Path;
//! use kodegen_bundler_innosetup::error::{ErrorExt, Result};
//!
//! async fn count_entries(path: &Path) -> Result<usize> {
//!     let mut entries = tokio::fs::read_dir(path)
//!         .await
//!         .fs_context("reading directory", path)?;
//!     let mut count = 0;
//!     while entries
//!         .next_entry()
//!         .await
//!         .fs_context("reading directory entry", path)?
//!         .is_some()
//!     {
//!         count += 1;
//!     }
//!     Ok(count)
//! }
//! ```

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error;

/// Result type alias for action operations
pub type Result<T> = std::result::Result<T, ActionError>;

/// Main error type for all action stages
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ActionError {
    /// CLI argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    // ============= Environment =============
    /// The runner is not a Windows host.
    #[error("This action is only supported on Windows!")]
    UnsupportedPlatform {
        /// Host OS name as reported by the runtime
        platform: String,
    },

    /// Workspace variable missing from the environment.
    #[error("GITHUB_WORKSPACE is not defined.")]
    WorkspaceUndefined,

    /// Workspace variable points at a path that does not exist.
    #[error("Workspace path does not exist.")]
    WorkspaceMissing {
        /// Path taken from the environment
        path: PathBuf,
    },

    /// Workspace directory exists but holds nothing.
    #[error(
        "The repository was not cloned. Please specify the actions/checkout action before this step."
    )]
    WorkspaceEmpty {
        /// Path taken from the environment
        path: PathBuf,
    },

    // ============= Toolchain =============
    /// Package manager install failed (fatal, no further fallback).
    #[error("Failed to install Inno Setup: {0}")]
    InstallFailed(String),

    /// Installer download returned a non-success status.
    #[error("Download failed with status {status}")]
    DownloadStatus {
        /// Final HTTP status code
        status: u16,
    },

    /// Redirect chain longer than the allowed hop count.
    #[error("Too many redirects while downloading installer")]
    TooManyRedirects,

    /// Silent installer ran but exited unsuccessfully.
    #[error("installer {path} exited with {status}")]
    SilentInstallFailed {
        /// Path of the downloaded installer
        path: PathBuf,
        /// Exit status description
        status: String,
    },

    // ============= Compiler =============
    /// iscc.exe not found after installation.
    #[error("Could not locate iscc.exe after installation.")]
    CompilerNotFound,

    /// iscc.exe exited non-zero.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    // ============= Transport =============
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "creating installer file")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Child process could not be started.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// HTTP client error (downloading the installer).
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("{0}")]
    UrlParse(#[from] url::ParseError),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Required input left empty
    #[error("Input required and not supplied: {input}")]
    MissingInput {
        /// Input name as declared by the action
        input: String,
    },

    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ActionError {
    /// Message reported to the runner when the run fails.
    pub fn failure_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "An unknown error occurred.".to_string()
        } else {
            message
        }
    }
}

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with [`ActionError`].
pub trait Context<T> {
    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| ActionError::Context(f().to_string(), Box::new(e)))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading directory", "creating installer file".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| ActionError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
