//! Suites and their cases.

use numc_ir::{ExpectedResult, Operation};
use rustc_hash::FxHashSet;

use crate::RegistryError;

/// One named operation paired with its expected result.
///
/// Cases are only constructed through [`SuiteBuilder`], so every `TestCase`
/// reachable from a `Suite` has passed structural validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    operation: Operation,
    expected: ExpectedResult,
}

impl TestCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn expected(&self) -> &ExpectedResult {
        &self.expected
    }
}

/// A named, ordered group of cases.
///
/// Order mirrors the order cases were added and is kept in reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suite {
    name: String,
    cases: Vec<TestCase>,
}

impl Suite {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Collects cases for one suite and validates them together.
#[derive(Debug)]
pub struct SuiteBuilder {
    name: String,
    cases: Vec<TestCase>,
}

impl SuiteBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        SuiteBuilder {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    #[must_use]
    pub fn case(
        mut self,
        name: impl Into<String>,
        operation: Operation,
        expected: ExpectedResult,
    ) -> Self {
        self.cases.push(TestCase {
            name: name.into(),
            operation,
            expected,
        });
        self
    }

    /// Validate every case in insertion order and seal the suite.
    ///
    /// Returns the first problem found: a duplicate name, an operation that
    /// is not total, or an expectation the operation cannot produce.
    pub fn finish(self) -> Result<Suite, RegistryError> {
        let mut seen = FxHashSet::default();
        for case in &self.cases {
            if !seen.insert(case.name.as_str()) {
                return Err(RegistryError::DuplicateCase {
                    suite: self.name.clone(),
                    case: case.name.clone(),
                });
            }

            let structural = |source| RegistryError::Structural {
                suite: self.name.clone(),
                case: case.name.clone(),
                source,
            };
            let output = case.operation.validate().map_err(structural)?;
            case.expected.check_compatible(output).map_err(structural)?;
        }

        Ok(Suite {
            name: self.name,
            cases: self.cases,
        })
    }
}
