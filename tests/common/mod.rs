//! Shared fakes for driving the action pipeline in tests.

#![allow(dead_code)]

use kodegen_bundler_innosetup::{
    ActionError, ActionSettings, ProgramDirs, Reporter, Result,
    settings::SUPPORTED_PLATFORM,
    utils::{http::Downloader, process::CommandOutput, process::CommandRunner},
};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};
use tempfile::TempDir;

/// One recorded process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Call {
    /// Lowercased file name of the program, e.g. `choco` or `iscc.exe`.
    pub fn name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

type Handler = Box<dyn Fn(&Call) -> Result<CommandOutput> + Send + Sync>;

/// Runner answering each invocation through a handler and recording it.
pub struct FakeRunner {
    handler: Handler,
    calls: Mutex<Vec<Call>>,
}

impl FakeRunner {
    pub fn new(handler: impl Fn(&Call) -> Result<CommandOutput> + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_named(&self, name: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.name() == name)
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        let call = Call {
            program: program.to_path_buf(),
            args: args.to_vec(),
        };
        self.calls.lock().unwrap().push(call.clone());
        (self.handler)(&call)
    }
}

/// Downloader returning a scripted result without touching the network.
pub struct FakeDownloader {
    outcome: Box<dyn Fn() -> Result<u64> + Send + Sync>,
    urls: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeDownloader {
    pub fn succeeding() -> Self {
        Self::with(|| Ok(1024))
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::with(move || Err(ActionError::DownloadStatus { status }))
    }

    pub fn with(outcome: impl Fn() -> Result<u64> + Send + Sync + 'static) -> Self {
        Self {
            outcome: Box::new(outcome),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, PathBuf)> {
        self.urls.lock().unwrap().clone()
    }
}

impl Downloader for FakeDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        self.urls
            .lock()
            .unwrap()
            .push((url.to_string(), dest.to_path_buf()));
        (self.outcome)()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Warning(String),
    Error(String),
    Failure(String),
    Success(String),
}

/// Reporter keeping every line in memory.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<Line>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Warning(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Success(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(Line::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(Line::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(Line::Error(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(Line::Failure(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(Line::Success(message.to_string()));
    }
}

pub fn ok(stdout: &str) -> Result<CommandOutput> {
    Ok(CommandOutput {
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    })
}

pub fn exit(code: i32, stderr: &str) -> Result<CommandOutput> {
    Ok(CommandOutput {
        code: Some(code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    })
}

/// Temporary runner layout: a checked-out workspace and two program-files roots.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("workspace")).unwrap();
        std::fs::create_dir_all(root.path().join("pf86")).unwrap();
        std::fs::create_dir_all(root.path().join("pf")).unwrap();
        Self { root }
    }

    /// Sandbox whose workspace contains one script.
    pub fn checked_out() -> Self {
        let sandbox = Self::new();
        std::fs::write(sandbox.workspace().join("setup.iss"), "[Setup]\n").unwrap();
        sandbox
    }

    pub fn workspace(&self) -> PathBuf {
        self.root.path().join("workspace")
    }

    pub fn program_dirs(&self) -> ProgramDirs {
        ProgramDirs {
            program_files_x86: Some(self.root.path().join("pf86")),
            program_files: Some(self.root.path().join("pf")),
        }
    }

    /// Create `<root>/<product>/iscc.exe` and return its path.
    pub fn install_iscc(&self, root: &str, product: &str) -> PathBuf {
        let dir = self.root.path().join(root).join(product);
        std::fs::create_dir_all(&dir).unwrap();
        let exe = dir.join("iscc.exe");
        std::fs::write(&exe, b"MZ").unwrap();
        exe
    }

    /// Windows settings compiling `setup.iss` from this sandbox.
    pub fn settings(&self) -> ActionSettings {
        let mut settings = ActionSettings::new("setup.iss");
        settings.platform = SUPPORTED_PLATFORM.to_string();
        settings.workspace = Some(self.workspace());
        settings.program_dirs = self.program_dirs();
        settings
    }
}
