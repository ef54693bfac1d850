//! Task log output.
//!
//! On a GitHub Actions runner warnings and the final failure are emitted as
//! workflow commands so they surface as annotations; everywhere else they are
//! printed with colored markers.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Sink for the task log.
pub trait Reporter {
    /// Normal log line (stdout).
    fn info(&self, message: &str);

    /// Recoverable problem.
    fn warning(&self, message: &str);

    /// Error log line (stderr), not a task failure by itself.
    fn error(&self, message: &str);

    /// Mark the task as failed with `message`.
    fn failure(&self, message: &str);

    /// Completion line.
    fn success(&self, message: &str);
}

/// Output manager for the action's console log
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    stderr: BufferWriter,
    workflow_commands: bool,
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(workflow_commands: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            stderr: BufferWriter::stderr(ColorChoice::Auto),
            workflow_commands,
        }
    }

    /// Output manager configured for the current environment.
    ///
    /// Workflow commands are enabled when `GITHUB_ACTIONS` is `true`.
    pub fn from_env() -> Self {
        let in_actions = std::env::var("GITHUB_ACTIONS")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self::new(in_actions)
    }

    /// Decide where a log line goes and how it looks.
    fn render(&self, level: Level, message: &str) -> Rendered {
        let (stream, marker, text) = match level {
            Level::Info | Level::Success => (Stream::Stdout, None, message.to_string()),
            Level::Error => (Stream::Stderr, None, message.to_string()),
            Level::Warning if self.workflow_commands => {
                (Stream::Stdout, None, workflow_command("warning", message))
            }
            Level::Warning => (Stream::Stdout, Some(("⚠", Color::Yellow)), message.to_string()),
            Level::Failure if self.workflow_commands => {
                (Stream::Stdout, None, workflow_command("error", message))
            }
            Level::Failure => (Stream::Stderr, Some(("✗", Color::Red)), message.to_string()),
        };
        Rendered {
            stream,
            marker,
            text,
        }
    }

    fn emit(&self, level: Level, message: &str) {
        let line = self.render(level, message);
        let wtr = match line.stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        };

        let mut buffer = wtr.buffer();
        if let Some((marker, color)) = line.marker {
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
            let _ = write!(&mut buffer, "{} ", marker);
            let _ = buffer.reset();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)));
        }
        let _ = writeln!(&mut buffer, "{}", line.text);
        let _ = buffer.reset();

        if wtr.print(&buffer).is_err() {
            match line.marker {
                Some((marker, _)) => println!("{} {}", marker, line.text),
                None => println!("{}", line.text),
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Warning,
    Error,
    Failure,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// A log line ready to print.
#[derive(Debug)]
struct Rendered {
    stream: Stream,
    marker: Option<(&'static str, Color)>,
    text: String,
}

impl Reporter for OutputManager {
    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn failure(&self, message: &str) {
        self.emit(Level::Failure, message);
    }

    fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }
}

/// Format a `::command::message` workflow command.
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

/// Escape command data the way the runner expects.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
