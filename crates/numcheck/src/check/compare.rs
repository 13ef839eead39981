//! Expected-vs-actual comparison.

use numc_ir::{ExpectedResult, Scalar};

/// How an actual result relates to its expectation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Same shape, same value.
    Match,
    /// Same kind of output, different value.
    ValueMismatch,
    /// The actual result could never satisfy the expectation: boolean vs
    /// number, or numbers of different widths.
    Structural,
}

/// Compare an expectation with a classified actual result.
///
/// - specials match by classification only, so any NaN encoding matches NaN
/// - numbers match bit-for-bit (floats) or by value (integers), never with
///   an epsilon
/// - a special never matches a number; for float outputs that is a value
///   mismatch, for anything else it is structural
pub fn compare(expected: &ExpectedResult, actual: &ExpectedResult) -> Verdict {
    match (*expected, *actual) {
        (ExpectedResult::Special(e), ExpectedResult::Special(a)) => matched(e == a),
        (ExpectedResult::Boolean(e), ExpectedResult::Boolean(a)) => matched(e == a),
        (ExpectedResult::Numeric(e), ExpectedResult::Numeric(a)) => {
            if e.kind() == a.kind() {
                matched(e == a)
            } else {
                Verdict::Structural
            }
        }
        (ExpectedResult::Numeric(n), ExpectedResult::Special(_))
        | (ExpectedResult::Special(_), ExpectedResult::Numeric(n)) => special_vs_numeric(n),
        (ExpectedResult::Boolean(_), _) | (_, ExpectedResult::Boolean(_)) => Verdict::Structural,
    }
}

fn matched(equal: bool) -> Verdict {
    if equal {
        Verdict::Match
    } else {
        Verdict::ValueMismatch
    }
}

fn special_vs_numeric(numeric: Scalar) -> Verdict {
    if numeric.kind().is_float() {
        Verdict::ValueMismatch
    } else {
        Verdict::Structural
    }
}

#[cfg(test)]
mod tests;
