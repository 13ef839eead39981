//! Numc IR - Data model for the numeric conformance checker.
//!
//! This crate contains the types every other `numc_*` crate speaks:
//! - `NumKind` and `Scalar` for width-tagged operands
//! - `Operation` describing one arithmetic, comparison or cast step
//! - `ExpectedResult` describing what a case must produce
//! - `StructuralError` for cases that cannot be well-formed
//!
//! # Design Philosophy
//!
//! - **No implicit promotion**: binary operations take two operands of the
//!   same `NumKind`; widening or narrowing is always an explicit cast.
//! - **Floats compare by bits**: `Scalar` equality is bit-for-bit, so `-0.0`
//!   and `0.0` differ and a NaN payload is part of the value.
//! - **Specials are classifications**: NaN and the infinities are expected
//!   through `SpecialValue`, never as numeric literals.

mod error;
mod expected;
mod operation;
mod scalar;

pub use error::StructuralError;
pub use expected::{ExpectedResult, ResultShape, SpecialValue};
pub use operation::{CompareOp, Operation, OutputKind};
pub use scalar::{Classification, NumKind, Scalar, Value};
