//! Numc Eval - Evaluator for numcheck operations.
//!
//! Evaluation uses the host's native arithmetic. Nothing here reimplements
//! IEEE-754; the evaluator only picks the Rust operation whose semantics
//! matches the required policy for each operation:
//! - `%` and `/` on `f32`/`f64` (fmod-style remainder, IEEE division)
//! - `wrapping_*` on `i32`/`i64` (two's-complement wraparound, no trap)
//! - `as` for casts (saturating float-to-int, NaN to zero)
//!
//! Malformed operations (mixed widths, integer division by zero) are
//! reported as a [`StructuralError`] instead of panicking.

mod cast;
mod operators;

use numc_ir::{Operation, StructuralError, Value};

pub use cast::cast_scalar;

/// Result of evaluating an operation.
pub type EvalResult = Result<Value, StructuralError>;

/// Evaluate one operation.
pub fn evaluate(operation: &Operation) -> EvalResult {
    match *operation {
        Operation::Remainder { lhs, rhs } => operators::eval_remainder(lhs, rhs),
        Operation::IntegerAdd { lhs, rhs } => operators::eval_integer_add(lhs, rhs),
        Operation::IntegerSub { lhs, rhs } => operators::eval_integer_sub(lhs, rhs),
        Operation::Comparison { op, lhs, rhs } => operators::eval_comparison(op, lhs, rhs),
        Operation::Division { lhs, rhs } => operators::eval_division(lhs, rhs),
        Operation::NarrowingCast { source, target } => {
            if source.kind() == target {
                return Err(StructuralError::IdentityCast { kind: target });
            }
            Ok(Value::Scalar(cast_scalar(source, target)))
        }
    }
}

#[cfg(test)]
mod tests;
