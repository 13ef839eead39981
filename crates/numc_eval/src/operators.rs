//! Binary operator implementations.
//!
//! Direct enum-based dispatch: the operand kinds are a closed set, so each
//! operation matches on the `(lhs, rhs)` pair and any cross-width pair falls
//! through to a structural error.

use std::cmp::Ordering;

use numc_ir::{CompareOp, Scalar, StructuralError, Value};

use crate::EvalResult;

// Helper functions for the shared error paths

#[inline]
fn kind_mismatch(op: &'static str, lhs: Scalar, rhs: Scalar) -> StructuralError {
    StructuralError::OperandKindMismatch {
        op,
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}

#[inline]
fn scalar(s: Scalar) -> EvalResult {
    Ok(Value::Scalar(s))
}

/// Integer division or remainder with a zero guard.
///
/// Integer division by zero has no defined result. `MIN / -1` and `MIN % -1`
/// are defined and wrap.
#[inline]
fn nonzero_divisor<F>(is_zero: bool, op: F, op_name: &'static str) -> EvalResult
where
    F: FnOnce() -> Scalar,
{
    if is_zero {
        Err(StructuralError::ZeroIntegerDivisor { op: op_name })
    } else {
        scalar(op())
    }
}

/// Operator-style remainder: sign of the dividend, magnitude below the divisor.
///
/// Rust's `%` on floats is C `fmod`, which never rounds.
pub(crate) fn eval_remainder(lhs: Scalar, rhs: Scalar) -> EvalResult {
    match (lhs, rhs) {
        (Scalar::F64(a), Scalar::F64(b)) => scalar(Scalar::F64(a % b)),
        (Scalar::F32(a), Scalar::F32(b)) => scalar(Scalar::F32(a % b)),
        (Scalar::I32(a), Scalar::I32(b)) => {
            nonzero_divisor(b == 0, || Scalar::I32(a.wrapping_rem(b)), "%")
        }
        (Scalar::I64(a), Scalar::I64(b)) => {
            nonzero_divisor(b == 0, || Scalar::I64(a.wrapping_rem(b)), "%")
        }
        _ => Err(kind_mismatch("%", lhs, rhs)),
    }
}

/// IEEE division for floats (zero divisors give NaN or a signed infinity),
/// truncated wrapping division for integers.
pub(crate) fn eval_division(lhs: Scalar, rhs: Scalar) -> EvalResult {
    match (lhs, rhs) {
        (Scalar::F64(a), Scalar::F64(b)) => scalar(Scalar::F64(a / b)),
        (Scalar::F32(a), Scalar::F32(b)) => scalar(Scalar::F32(a / b)),
        (Scalar::I32(a), Scalar::I32(b)) => {
            nonzero_divisor(b == 0, || Scalar::I32(a.wrapping_div(b)), "/")
        }
        (Scalar::I64(a), Scalar::I64(b)) => {
            nonzero_divisor(b == 0, || Scalar::I64(a.wrapping_div(b)), "/")
        }
        _ => Err(kind_mismatch("/", lhs, rhs)),
    }
}

pub(crate) fn eval_integer_add(lhs: Scalar, rhs: Scalar) -> EvalResult {
    match (lhs, rhs) {
        (Scalar::I32(a), Scalar::I32(b)) => scalar(Scalar::I32(a.wrapping_add(b))),
        (Scalar::I64(a), Scalar::I64(b)) => scalar(Scalar::I64(a.wrapping_add(b))),
        _ if lhs.kind() == rhs.kind() => Err(StructuralError::IntegerOperandRequired {
            op: "+",
            kind: lhs.kind(),
        }),
        _ => Err(kind_mismatch("+", lhs, rhs)),
    }
}

pub(crate) fn eval_integer_sub(lhs: Scalar, rhs: Scalar) -> EvalResult {
    match (lhs, rhs) {
        (Scalar::I32(a), Scalar::I32(b)) => scalar(Scalar::I32(a.wrapping_sub(b))),
        (Scalar::I64(a), Scalar::I64(b)) => scalar(Scalar::I64(a.wrapping_sub(b))),
        _ if lhs.kind() == rhs.kind() => Err(StructuralError::IntegerOperandRequired {
            op: "-",
            kind: lhs.kind(),
        }),
        _ => Err(kind_mismatch("-", lhs, rhs)),
    }
}

/// Comparisons go through `partial_cmp`, so any NaN operand yields `None`
/// and every operator except `!=` is false.
pub(crate) fn eval_comparison(op: CompareOp, lhs: Scalar, rhs: Scalar) -> EvalResult {
    let ordering = match (lhs, rhs) {
        (Scalar::I32(a), Scalar::I32(b)) => Some(a.cmp(&b)),
        (Scalar::I64(a), Scalar::I64(b)) => Some(a.cmp(&b)),
        (Scalar::F32(a), Scalar::F32(b)) => a.partial_cmp(&b),
        (Scalar::F64(a), Scalar::F64(b)) => a.partial_cmp(&b),
        _ => return Err(kind_mismatch(op.as_symbol(), lhs, rhs)),
    };
    Ok(Value::Bool(apply_ordering(op, ordering)))
}

fn apply_ordering(op: CompareOp, ordering: Option<Ordering>) -> bool {
    match op {
        CompareOp::Eq => ordering == Some(Ordering::Equal),
        CompareOp::NotEq => ordering != Some(Ordering::Equal),
        CompareOp::Lt => ordering == Some(Ordering::Less),
        CompareOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        CompareOp::Gt => ordering == Some(Ordering::Greater),
        CompareOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
    }
}
