//! Action settings.
//!
//! All inputs are read once at startup into [`ActionSettings`] and handed to
//! each stage by reference.

use std::path::PathBuf;

/// Vendor endpoint serving the newest Inno Setup installer.
pub const DEFAULT_INSTALLER_URL: &str = "https://jrsoftware.org/download.php/is.exe?site=1";

/// Host OS name this action runs on, as reported by `std::env::consts::OS`.
pub const SUPPORTED_PLATFORM: &str = "windows";

/// Program-files roots used to derive the compiler candidate paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramDirs {
    /// `ProgramFiles(x86)`: 32-bit program files on a 64-bit host
    pub program_files_x86: Option<PathBuf>,
    /// `ProgramFiles`: native program files
    pub program_files: Option<PathBuf>,
}

impl ProgramDirs {
    /// Roots in search priority order, skipping unset ones.
    pub fn roots(&self) -> impl Iterator<Item = &PathBuf> {
        self.program_files_x86
            .iter()
            .chain(self.program_files.iter())
    }
}

/// Configuration for one run of the action.
#[derive(Debug, Clone)]
pub struct ActionSettings {
    /// Host OS name
    pub platform: String,
    /// Workspace root (`GITHUB_WORKSPACE`)
    pub workspace: Option<PathBuf>,
    /// Script path relative to the workspace root
    pub script: PathBuf,
    /// Extra compiler arguments, in the order supplied
    pub options: Vec<String>,
    /// Download the vendor installer instead of going straight to Chocolatey
    pub install_latest: bool,
    /// Where the vendor installer is fetched from
    pub installer_url: String,
    /// Candidate install roots
    pub program_dirs: ProgramDirs,
}

impl ActionSettings {
    /// Settings for `script` with every other value at its default.
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            workspace: None,
            script: script.into(),
            options: Vec::new(),
            install_latest: false,
            installer_url: DEFAULT_INSTALLER_URL.to_string(),
            program_dirs: ProgramDirs::default(),
        }
    }
}

/// Split a multi-line input into trimmed, non-empty lines.
pub fn parse_multiline_input(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Interpret a boolean input; only `true` (any case) enables it.
pub fn parse_bool_input(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Installer URL input, falling back to the vendor default when blank.
pub fn installer_url_or_default(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_INSTALLER_URL.to_string(),
    }
}
