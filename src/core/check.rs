//! Checks and sections.

use crate::core::error::Result;
use crate::core::outcome::{Outcome, Tally};
use crate::core::project::ProjectRoot;
use crate::core::reporter::{Level, Reporter};

/// A single named verification against the project tree.
///
/// `execute` must only read. An expected absence (missing file, missing key)
/// is a FAIL or WARN outcome; `Err` is reserved for conditions that make it
/// impossible to decide, and aborts the run.
pub trait Check: std::fmt::Debug {
    /// Display name of the check.
    fn name(&self) -> &str;

    /// Inspects the project and produces exactly one outcome.
    fn execute(&self, root: &ProjectRoot) -> Result<Outcome>;
}

/// An ordered, titled group of checks.
#[derive(Debug)]
pub struct Section {
    id: String,
    title: String,
    checks: Vec<Box<dyn Check>>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            checks: Vec::new(),
        }
    }

    /// Appends a check, builder style.
    #[must_use]
    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        self.push(Box::new(check));
        self
    }

    /// Appends a check.
    pub fn push(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Returns the stable identifier used in configuration.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the checks in declaration order.
    #[must_use]
    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// Returns the number of checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if the section has no checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check in order, reporting each outcome.
    ///
    /// Stops at the first check that returns an error and propagates it.
    pub fn run(&self, root: &ProjectRoot, reporter: &mut dyn Reporter) -> Result<Tally> {
        let mut tally = Tally::default();
        self.run_into(root, reporter, &mut tally)?;
        Ok(tally)
    }

    /// Like [`Section::run`], but counts into `tally` as it goes, so outcomes
    /// reported before an error are still counted.
    pub fn run_into(
        &self,
        root: &ProjectRoot,
        reporter: &mut dyn Reporter,
        tally: &mut Tally,
    ) -> Result<()> {
        reporter.emit(Level::SectionHeader, &self.title);

        for check in &self.checks {
            let outcome = check.execute(root)?;
            tracing::trace!(
                section = %self.id,
                check = check.name(),
                status = %outcome.status(),
                "Check finished"
            );
            reporter.emit(outcome.status().into(), outcome.message());
            tally.record(outcome.status());
        }

        Ok(())
    }
}
