//! Check runner.
//!
//! Runs sections in declaration order, folds their subtotals into a
//! [`RunSummary`], and decides the verdict. This is the only place where an
//! aborting error is caught: it is reported at [`Level::Fatal`] and turned
//! into a failing verdict.

use crate::core::check::Section;
use crate::core::error::Error;
use crate::core::outcome::Tally;
use crate::core::project::ProjectRoot;
use crate::core::reporter::{Level, Reporter};
use serde::Serialize;
use std::time::Instant;

/// Final decision of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No check failed and the run completed.
    Success,
    /// At least one check failed.
    Failure,
    /// An unexpected condition stopped the run early.
    Aborted,
}

impl Verdict {
    /// Returns the process exit code for this verdict.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure | Self::Aborted => 1,
        }
    }
}

/// Subtotal of one section that ran, possibly cut short by an abort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTally {
    /// Section identifier.
    pub id: String,
    /// Counters for the section.
    pub tally: Tally,
}

/// Accumulated result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Totals over every outcome that was reported.
    pub totals: Tally,
    /// Per-section subtotals, in run order.
    pub sections: Vec<SectionTally>,
    /// Message of the error that aborted the run, if any.
    pub aborted: Option<String>,
}

impl RunSummary {
    /// Returns the verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.aborted.is_some() {
            Verdict::Aborted
        } else if self.totals.failed > 0 {
            Verdict::Failure
        } else {
            Verdict::Success
        }
    }

    /// Returns true if the run completed without failures.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.verdict(), Verdict::Success)
    }

    /// Returns the process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.verdict().exit_code()
    }

    /// Returns the one-line verdict message.
    #[must_use]
    pub fn verdict_message(&self) -> String {
        match self.verdict() {
            Verdict::Success => "Project validated successfully!".to_string(),
            Verdict::Failure => format!(
                "Found {} error(s). Review the messages above.",
                self.totals.failed
            ),
            Verdict::Aborted => format!(
                "Run aborted after {} error(s). Fix the fatal condition above and re-run.",
                self.totals.failed
            ),
        }
    }
}

/// Runner for executing sections against one project root.
#[derive(Debug)]
pub struct Runner {
    root: ProjectRoot,
}

impl Runner {
    /// Creates a runner for the given project root.
    #[must_use]
    pub fn new(root: ProjectRoot) -> Self {
        Self { root }
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    /// Runs all sections in order and reports a summary.
    ///
    /// Never returns an error: an aborting condition is reported and shows up
    /// as [`Verdict::Aborted`].
    pub fn run(&self, sections: &[Section], reporter: &mut dyn Reporter) -> RunSummary {
        let start = Instant::now();
        reporter.begin(self.root.path());

        let mut summary = RunSummary {
            totals: Tally::default(),
            sections: Vec::with_capacity(sections.len()),
            aborted: None,
        };

        if let Err(e) = self.run_sections(sections, reporter, &mut summary) {
            tracing::error!(error = %e, "Run aborted");
            reporter.emit(Level::Fatal, &fatal_message(&e));
            summary.aborted = Some(e.to_string());
        }

        report_summary(&summary, reporter);

        tracing::debug!(
            elapsed = %humantime::format_duration(truncate_to_millis(start.elapsed())),
            passed = summary.totals.passed,
            failed = summary.totals.failed,
            "Run finished"
        );

        summary
    }

    fn run_sections(
        &self,
        sections: &[Section],
        reporter: &mut dyn Reporter,
        summary: &mut RunSummary,
    ) -> crate::core::error::Result<()> {
        for section in sections {
            tracing::debug!(section = section.id(), checks = section.len(), "Running section");
            let mut tally = Tally::default();
            let result = section.run_into(&self.root, reporter, &mut tally);
            summary.totals += tally;
            summary.sections.push(SectionTally {
                id: section.id().to_string(),
                tally,
            });
            result?;
        }
        Ok(())
    }
}

fn fatal_message(error: &Error) -> String {
    if error.is_fatal_inspection() {
        format!("Aborted: {error}")
    } else {
        format!("Aborted by unexpected error: {error}")
    }
}

fn report_summary(summary: &RunSummary, reporter: &mut dyn Reporter) {
    reporter.emit(Level::SectionHeader, "Summary");
    reporter.emit(
        Level::Summary,
        &format!("Successful checks: {}", summary.totals.passed),
    );
    reporter.emit(
        Level::Summary,
        &format!("Errors found: {}", summary.totals.failed),
    );
    reporter.emit(
        Level::Summary,
        &format!("Warnings: {}", summary.totals.warned),
    );
    reporter.emit(Level::Summary, &summary.verdict_message());
}

fn truncate_to_millis(duration: std::time::Duration) -> std::time::Duration {
    std::time::Duration::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
