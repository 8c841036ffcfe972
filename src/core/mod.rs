//! Core functionality for scaffold-check.
//!
//! This module contains the engine:
//! - [`check`]: The `Check` trait and ordered `Section`s
//! - [`runner`]: Runs sections, accumulates totals, decides the exit status
//! - [`reporter`]: Line sinks for outcomes, headers, summary and fatal errors
//! - [`project`]: Read-only access to the inspected project tree
//! - [`error`]: Error types and result handling

pub mod check;
pub mod error;
pub mod jsonc;
pub mod outcome;
pub mod project;
pub mod reporter;
pub mod runner;
