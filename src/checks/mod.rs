//! Built-in checks.
//!
//! [`rules`] holds the declarative probes a check is made of, and
//! [`catalog`] arranges them into the fixed, ordered list of sections.

pub mod catalog;
pub mod rules;
