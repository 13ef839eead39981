//! Report types.

use std::fmt::{self, Write as _};

use numc_registry::TestCase;

use super::Verdict;

/// Outcome of a single case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Actual result matched the expectation.
    Passed,
    /// Actual result differed in value.
    ValueMismatch,
    /// Actual result could not be compared with the expectation at all.
    Structural,
}

impl EntryOutcome {
    pub fn is_passed(self) -> bool {
        matches!(self, EntryOutcome::Passed)
    }

    pub fn is_structural(self) -> bool {
        matches!(self, EntryOutcome::Structural)
    }
}

impl From<Verdict> for EntryOutcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Match => EntryOutcome::Passed,
            Verdict::ValueMismatch => EntryOutcome::ValueMismatch,
            Verdict::Structural => EntryOutcome::Structural,
        }
    }
}

/// Result of checking a single case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    /// Name of the suite the case belongs to.
    pub suite: String,
    /// Name of the case.
    pub case_name: String,
    /// Rendering of the operation, shown in verbose output.
    pub operation: String,
    pub outcome: EntryOutcome,
    /// Rendering of the expected result.
    pub expected: String,
    /// Rendering of the actual result, or of the error that replaced it.
    pub actual: String,
}

impl ReportEntry {
    pub fn new(suite: &str, case: &TestCase, outcome: EntryOutcome, actual: String) -> Self {
        ReportEntry {
            suite: suite.to_string(),
            case_name: case.name().to_string(),
            operation: case.operation().to_string(),
            outcome,
            expected: case.expected().to_string(),
            actual,
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: ", self.suite, self.case_name)?;
        match self.outcome {
            EntryOutcome::Passed => f.write_str("PASS"),
            EntryOutcome::ValueMismatch => write!(
                f,
                "FAIL (expected={}, actual={})",
                self.expected, self.actual
            ),
            EntryOutcome::Structural => write!(
                f,
                "FAIL (structural: expected={}, actual={})",
                self.expected, self.actual
            ),
        }
    }
}

/// Ordered results of one run plus summary counts.
///
/// Entries appear in registry order regardless of how cases were scheduled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
    passed: usize,
    value_mismatches: usize,
    structural: usize,
    /// Problems that prevented cases from running (malformed registry,
    /// unknown suite names).
    errors: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    /// A zero-confidence report for a registry that could not be built.
    pub fn malformed(error: &impl fmt::Display) -> Self {
        let mut report = Report::new();
        report.add_error(error.to_string());
        report
    }

    pub fn add_entry(&mut self, entry: ReportEntry) {
        match entry.outcome {
            EntryOutcome::Passed => self.passed += 1,
            EntryOutcome::ValueMismatch => self.value_mismatches += 1,
            EntryOutcome::Structural => self.structural += 1,
        }
        self.entries.push(entry);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.value_mismatches + self.structural
    }

    pub fn value_mismatches(&self) -> usize {
        self.value_mismatches
    }

    pub fn structural(&self) -> usize {
        self.structural
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if any case failed or any case could not run.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || !self.errors.is_empty()
    }

    /// Fraction of cases that passed, in `[0, 1]`.
    ///
    /// A report with errors, or with no cases, carries no confidence at all.
    pub fn confidence(&self) -> f64 {
        if !self.errors.is_empty() || self.total() == 0 {
            return 0.0;
        }
        // Case counts are tiny; clamping keeps the u32 -> f64 conversion lossless.
        let passed = u32::try_from(self.passed).unwrap_or(u32::MAX);
        let total = u32::try_from(self.total()).unwrap_or(u32::MAX);
        f64::from(passed) / f64::from(total)
    }

    /// Get exit code: 0 = everything passed, 1 = any failure or error.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }

    /// Render one line per case, then errors, then the summary line.
    ///
    /// Verbose output adds the operation under each case.
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{entry}");
            if verbose {
                let _ = writeln!(out, "    {}", entry.operation);
            }
        }
        for error in &self.errors {
            let _ = writeln!(out, "error: {error}");
        }
        let _ = writeln!(out, "{}/{} passed", self.passed, self.total());
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
