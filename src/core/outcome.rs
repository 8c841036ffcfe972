//! Check outcomes and tallies.

use serde::Serialize;

/// The kind of result a check produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The expectation holds.
    Pass,
    /// The expectation is violated.
    Fail,
    /// Advisory deviation. Surfaced, never counted.
    Warn,
}

impl Status {
    /// Returns a lowercase name for the status.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Warn => "warn",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of executing one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    status: Status,
    message: String,
}

impl Outcome {
    /// Creates a passing outcome.
    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Status::Pass, message)
    }

    /// Creates a failing outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Status::Fail, message)
    }

    /// Creates an advisory outcome.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Status::Warn, message)
    }

    /// Creates an outcome with an explicit status.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pass/fail counters for a section or a whole run.
///
/// Warnings are tracked for the summary only; they never count as a pass or
/// as a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Number of PASS outcomes.
    pub passed: usize,
    /// Number of FAIL outcomes.
    pub failed: usize,
    /// Number of WARN outcomes.
    pub warned: usize,
}

impl Tally {
    /// Counts one outcome.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            Status::Warn => self.warned += 1,
        }
    }

    /// Returns the number of outcomes that decide the verdict.
    #[must_use]
    pub const fn counted(&self) -> usize {
        self.passed + self.failed
    }
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.passed += rhs.passed;
        self.failed += rhs.failed;
        self.warned += rhs.warned;
    }
}
