//! # scaffold-check
//!
//! Read-only conformance checks for a project's scaffolding.
//!
//! A run walks an ordered list of sections. Each section holds checks, and
//! each check inspects the project tree and reports exactly one outcome:
//! PASS, FAIL or WARN. The run ends with totals and a verdict; any FAIL makes
//! the run unsuccessful, warnings never do. A condition that makes a check
//! impossible to decide (an unreadable file, a malformed manifest) aborts the
//! whole run.
//!
//! ## Features
//!
//! - **Built-in catalog**: structure, workspace packages, TypeScript, PWA,
//!   audio, `IndexedDB`, tests and dependencies
//! - **Pluggable checks**: anything implementing [`Check`] can join a [`Section`]
//! - **Pluggable output**: console, JSON lines, or your own [`Reporter`]
//! - **Optional configuration**: `scaffold-check.toml` for severity policy,
//!   output format and skipped sections
//!
//! ## Example
//!
//! ```rust,no_run
//! use scaffold_check::{Config, ConsoleReporter, ProjectRoot, Runner};
//!
//! fn main() -> scaffold_check::Result<()> {
//!     let root = ProjectRoot::current_dir()?;
//!     let config = Config::load_for(root.path())?;
//!
//!     let mut reporter = ConsoleReporter::stdout(true);
//!     let summary = Runner::new(root).run(&config.sections(), &mut reporter);
//!
//!     std::process::exit(i32::from(summary.exit_code()));
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/scaffold-check/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;

// Re-export main types for convenience
pub use checks::rules::{Probe, Rule, Severity};
pub use config::Config;
pub use core::check::{Check, Section};
pub use core::error::{Error, Result};
pub use core::outcome::{Outcome, Status, Tally};
pub use core::project::ProjectRoot;
pub use core::reporter::{ConsoleReporter, JsonReporter, Level, Recorder, Reporter};
pub use core::runner::{RunSummary, Runner, Verdict};
