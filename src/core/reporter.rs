//! Report backends.
//!
//! A [`Reporter`] receives leveled messages from the runner and renders them.
//! It never feeds anything back: counters and control flow live in the runner.

use console::style;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Width of the banner rule.
const BANNER_WIDTH: usize = 60;
/// Width of the rule under a section header.
const SECTION_RULE_WIDTH: usize = 50;

/// Kind of line being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// A check passed.
    Pass,
    /// A check failed.
    Fail,
    /// A check produced an advisory warning.
    Warn,
    /// A section is starting.
    SectionHeader,
    /// A line of the final summary.
    Summary,
    /// The run was aborted by an unexpected condition.
    Fatal,
}

impl Level {
    /// Returns true for levels that carry a check outcome.
    #[must_use]
    pub const fn is_outcome(&self) -> bool {
        matches!(self, Self::Pass | Self::Fail | Self::Warn)
    }
}

impl From<crate::core::outcome::Status> for Level {
    fn from(status: crate::core::outcome::Status) -> Self {
        use crate::core::outcome::Status;
        match status {
            Status::Pass => Self::Pass,
            Status::Fail => Self::Fail,
            Status::Warn => Self::Warn,
        }
    }
}

/// Destination for report lines.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// Called once before anything else is emitted.
    fn begin(&mut self, _root: &Path) {}

    /// Renders one message.
    fn emit(&mut self, level: Level, message: &str);
}

// =============================================================================
// Console
// =============================================================================

/// Human-readable terminal output with level markers.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    colored: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    /// Creates a console reporter writing to standard output.
    #[must_use]
    pub fn stdout(colored: bool) -> Self {
        Self::new(std::io::stdout(), colored)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a console reporter writing to `out`.
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Consumes the reporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "Failed to write report line");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn begin(&mut self, root: &Path) {
        let rule = "═".repeat(BANNER_WIDTH);
        let colored = self.colored;
        self.line(format_args!(""));
        self.line(format_args!("{}", style(&rule).bold().force_styling(colored)));
        self.line(format_args!(
            "{}",
            style(" 🔎 scaffold-check — project validation")
                .bold()
                .force_styling(colored)
        ));
        self.line(format_args!("{}", style(&rule).bold().force_styling(colored)));
        self.line(format_args!(""));
        self.line(format_args!("  Project root: {}", root.display()));
    }

    fn emit(&mut self, level: Level, message: &str) {
        let colored = self.colored;
        match level {
            Level::Pass => {
                self.line(format_args!(
                    "  {} {message}",
                    style("✅").green().force_styling(colored)
                ));
            },
            Level::Fail => {
                self.line(format_args!(
                    "  {} {message}",
                    style("❌").red().force_styling(colored)
                ));
            },
            Level::Warn => {
                self.line(format_args!(
                    "  {} {message}",
                    style("⚠️").yellow().force_styling(colored)
                ));
            },
            Level::SectionHeader => {
                self.line(format_args!(""));
                self.line(format_args!(
                    "{}",
                    style(format!("📋 {message}"))
                        .blue()
                        .bold()
                        .force_styling(colored)
                ));
                self.line(format_args!("  {}", "─".repeat(SECTION_RULE_WIDTH)));
            },
            Level::Summary => {
                self.line(format_args!(
                    "  {}",
                    style(message).bold().force_styling(colored)
                ));
            },
            Level::Fatal => {
                self.line(format_args!(
                    "  {} {}",
                    style("💥").red().force_styling(colored),
                    style(message).red().bold().force_styling(colored)
                ));
            },
        }
    }
}

// =============================================================================
// JSON lines
// =============================================================================

/// One JSON object per line: `{"level": "...", "message": "..."}`.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    level: Level,
    message: &'a str,
}

impl JsonReporter<std::io::Stdout> {
    /// Creates a JSON reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    /// Creates a JSON reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn emit(&mut self, level: Level, message: &str) {
        let event = JsonEvent { level, message };
        let written = serde_json::to_writer(&mut self.out, &event)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = written {
            tracing::warn!(error = %e, "Failed to write report event");
        }
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Keeps every emitted message in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    events: Vec<(Level, String)>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded events.
    #[must_use]
    pub fn events(&self) -> &[(Level, String)] {
        &self.events
    }

    /// Returns only the events that carry a check outcome.
    #[must_use]
    pub fn outcomes(&self) -> Vec<(Level, String)> {
        self.events
            .iter()
            .filter(|(level, _)| level.is_outcome())
            .cloned()
            .collect()
    }

    /// Returns the messages recorded at `level`.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Reporter for Recorder {
    fn emit(&mut self, level: Level, message: &str) {
        self.events.push((level, message.to_string()));
    }
}
