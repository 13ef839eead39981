//! Numc Registry - The catalog of numeric edge-case suites.
//!
//! The registry is the single source of truth for what the correct behavior
//! of each operation is. It is built once, validated eagerly, and never
//! mutated afterwards:
//! - `SuiteBuilder` collects cases and validates them in `finish`
//! - `build_registry` assembles every suite in report order
//!
//! A malformed case is a construction bug, so `build_registry` fails fast
//! with the first `RegistryError` instead of handing a partial catalog on.

mod suite;
mod suites;

use numc_ir::StructuralError;
use rustc_hash::FxHashSet;

pub use suite::{Suite, SuiteBuilder, TestCase};
pub use suites::{
    DOUBLE_REMAINDER, FLOAT_EDGE, FLOAT_REMAINDER, INTEGER_EDGE, NARROWING_CAST,
};

/// A registry that cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{suite}/{case}: {source}")]
    Structural {
        suite: String,
        case: String,
        #[source]
        source: StructuralError,
    },

    #[error("suite `{suite}` contains case `{case}` more than once")]
    DuplicateCase { suite: String, case: String },

    #[error("suite `{suite}` is registered more than once")]
    DuplicateSuite { suite: String },
}

/// Build every suite, in report order.
pub fn build_registry() -> Result<Vec<Suite>, RegistryError> {
    let suites = suites::all()?;
    check_unique_names(&suites)?;
    tracing::debug!(
        suites = suites.len(),
        cases = suites.iter().map(Suite::len).sum::<usize>(),
        "registry built"
    );
    Ok(suites)
}

/// Reject a catalog that registers the same suite name twice.
pub fn check_unique_names(suites: &[Suite]) -> Result<(), RegistryError> {
    let mut seen = FxHashSet::default();
    for suite in suites {
        if !seen.insert(suite.name()) {
            return Err(RegistryError::DuplicateSuite {
                suite: suite.name().to_string(),
            });
        }
    }
    Ok(())
}
