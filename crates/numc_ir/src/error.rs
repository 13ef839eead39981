//! Structural errors: cases that can never be evaluated meaningfully.

use crate::{ExpectedResult, NumKind, OutputKind};

/// A case whose shape is wrong, independent of any evaluation result.
///
/// These are construction bugs in a registry. They are detected once, when
/// the registry is built, and never confused with a value mismatch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("operands of `{op}` differ in kind: {lhs} and {rhs}")]
    OperandKindMismatch {
        op: &'static str,
        lhs: NumKind,
        rhs: NumKind,
    },

    #[error("`{op}` requires integer operands, got {kind}")]
    IntegerOperandRequired { op: &'static str, kind: NumKind },

    #[error("integer `{op}` by zero is not a total operation")]
    ZeroIntegerDivisor { op: &'static str },

    #[error("cast from {kind} to itself")]
    IdentityCast { kind: NumKind },

    #[error("expected {expected} cannot come from an operation producing a {output}")]
    IncompatibleExpectation {
        expected: ExpectedResult,
        output: OutputKind,
    },

    #[error("numeric expectation {expected} is not finite; expect a special value instead")]
    NonFiniteNumeric { expected: ExpectedResult },
}
