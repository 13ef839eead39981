//! Conformance checking.
//!
//! This module provides:
//! - Comparison: kind-aware equality between expected and actual results
//! - Case execution: evaluating every selected case exactly once
//! - Result tracking: per-case entries and pass/fail counts
//! - Parallel execution: evaluating cases concurrently with rayon

mod compare;
mod result;
mod runner;

pub use compare::{compare, Verdict};
pub use result::{EntryOutcome, Report, ReportEntry};
pub use runner::{run, Runner, RunnerConfig};
