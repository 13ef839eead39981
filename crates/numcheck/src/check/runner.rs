//! Case execution engine.
//!
//! Runs every selected case of every suite and collects results.

use rayon::prelude::*;

use numc_ir::ExpectedResult;
use numc_registry::{Suite, TestCase};

use super::compare::compare;
use super::result::{EntryOutcome, Report, ReportEntry};

/// Configuration for the runner.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Filter cases by `suite/case` name (substring match).
    pub filter: Option<String>,
    /// Only run these suites. Empty means all.
    pub suites: Vec<String>,
    /// Show each case's operation in the rendered report.
    pub verbose: bool,
    /// Evaluate cases in parallel.
    pub parallel: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            suites: Vec::new(),
            verbose: false,
            parallel: true,
        }
    }
}

impl RunnerConfig {
    fn selects_suite(&self, suite: &str) -> bool {
        self.suites.is_empty() || self.suites.iter().any(|s| s == suite)
    }

    fn selects_case(&self, suite: &str, case: &str) -> bool {
        match &self.filter {
            Some(filter) => format!("{suite}/{case}").contains(filter.as_str()),
            None => true,
        }
    }
}

/// Conformance runner.
///
/// Never mutates the suites it is given; each call to `run` owns its own
/// report, so a runner can be reused and runs are idempotent.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Create a new runner with default config.
    pub fn new() -> Self {
        Runner::default()
    }

    /// Create a runner with custom config.
    pub fn with_config(config: RunnerConfig) -> Self {
        Runner { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every selected case and report in registry order.
    ///
    /// A failing case never stops the run.
    pub fn run(&self, suites: &[Suite]) -> Report {
        let mut report = Report::new();

        for name in &self.config.suites {
            if !suites.iter().any(|s| s.name() == name) {
                report.add_error(format!("unknown suite `{name}`"));
            }
        }

        let selected: Vec<(&Suite, &TestCase)> = suites
            .iter()
            .filter(|suite| self.config.selects_suite(suite.name()))
            .flat_map(|suite| suite.cases().iter().map(move |case| (suite, case)))
            .filter(|(suite, case)| self.config.selects_case(suite.name(), case.name()))
            .collect();

        let entries = if self.config.parallel {
            Self::run_parallel(&selected)
        } else {
            Self::run_sequential(&selected)
        };
        for entry in entries {
            report.add_entry(entry);
        }

        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            total = report.total(),
            "conformance run finished"
        );
        report
    }

    /// Run cases sequentially.
    fn run_sequential(cases: &[(&Suite, &TestCase)]) -> Vec<ReportEntry> {
        cases
            .iter()
            .map(|(suite, case)| check_case(suite, case))
            .collect()
    }

    /// Run cases in parallel using a scoped rayon thread pool.
    ///
    /// `par_iter().collect()` on a slice is indexed, so entries come back in
    /// the same order as `cases`. The scoped pool is torn down before this
    /// returns.
    fn run_parallel(cases: &[(&Suite, &TestCase)]) -> Vec<ReportEntry> {
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    cases
                        .par_iter()
                        .map(|(suite, case)| check_case(suite, case))
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                Self::run_sequential(cases)
            })
    }
}

/// Run the suites with the default configuration.
pub fn run(suites: &[Suite]) -> Report {
    Runner::new().run(suites)
}

/// Evaluate one case and classify the result.
///
/// An operation that cannot be evaluated is recorded as a structural failure
/// with the error in place of the actual value.
fn check_case(suite: &Suite, case: &TestCase) -> ReportEntry {
    let entry = match numc_eval::evaluate(case.operation()) {
        Ok(value) => {
            let actual = ExpectedResult::classify(value);
            let outcome = EntryOutcome::from(compare(case.expected(), &actual));
            ReportEntry::new(suite.name(), case, outcome, actual.to_string())
        }
        Err(err) => ReportEntry::new(
            suite.name(),
            case,
            EntryOutcome::Structural,
            err.to_string(),
        ),
    };
    tracing::debug!(
        suite = suite.name(),
        case = case.name(),
        outcome = ?entry.outcome,
        "case checked"
    );
    entry
}
