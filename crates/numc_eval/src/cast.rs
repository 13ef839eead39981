//! Explicit numeric conversions.
//!
//! Rust's `as` already implements the required conversion policies:
//! - float to integer truncates toward zero, saturates at the target's
//!   bounds, and maps NaN to 0
//! - integer to narrower integer keeps the low bits
//! - anything to float rounds to nearest

use numc_ir::{NumKind, Scalar};

macro_rules! convert {
    ($v:expr, $target:expr) => {
        match $target {
            NumKind::I32 => Scalar::I32($v as i32),
            NumKind::I64 => Scalar::I64($v as i64),
            NumKind::F32 => Scalar::F32($v as f32),
            NumKind::F64 => Scalar::F64($v as f64),
        }
    };
}

/// Convert `source` to `target` kind. Same-kind conversion returns `source`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::unnecessary_cast,
    reason = "lossy `as` conversions are the policy under test"
)]
pub fn cast_scalar(source: Scalar, target: NumKind) -> Scalar {
    match source {
        Scalar::I32(v) => convert!(v, target),
        Scalar::I64(v) => convert!(v, target),
        Scalar::F32(v) => convert!(v, target),
        Scalar::F64(v) => convert!(v, target),
    }
}
