//! Tests for explicit conversions.

use crate::{cast_scalar, evaluate};
use numc_ir::{NumKind, Operation, Scalar, StructuralError};
use pretty_assertions::assert_eq;

#[test]
fn test_float_to_int_saturates() {
    assert_eq!(cast_scalar(Scalar::F64(f64::NAN), NumKind::I32), Scalar::I32(0));
    assert_eq!(
        cast_scalar(Scalar::F64(f64::INFINITY), NumKind::I32),
        Scalar::I32(i32::MAX)
    );
    assert_eq!(
        cast_scalar(Scalar::F64(f64::NEG_INFINITY), NumKind::I32),
        Scalar::I32(i32::MIN)
    );
    assert_eq!(cast_scalar(Scalar::F64(f64::NAN), NumKind::I64), Scalar::I64(0));
    assert_eq!(
        cast_scalar(Scalar::F64(f64::INFINITY), NumKind::I64),
        Scalar::I64(i64::MAX)
    );
    assert_eq!(
        cast_scalar(Scalar::F64(f64::NEG_INFINITY), NumKind::I64),
        Scalar::I64(i64::MIN)
    );
    assert_eq!(cast_scalar(Scalar::F64(1e10), NumKind::I32), Scalar::I32(i32::MAX));
    assert_eq!(cast_scalar(Scalar::F32(f32::NAN), NumKind::I32), Scalar::I32(0));
}

#[test]
fn test_float_to_int_truncates_toward_zero() {
    assert_eq!(cast_scalar(Scalar::F64(123.456), NumKind::I32), Scalar::I32(123));
    assert_eq!(cast_scalar(Scalar::F64(-123.456), NumKind::I32), Scalar::I32(-123));
    assert_eq!(cast_scalar(Scalar::F32(-0.9), NumKind::I64), Scalar::I64(0));
}

#[test]
fn test_int_to_float_rounds_to_nearest() {
    assert_eq!(
        cast_scalar(Scalar::I32(i32::MAX), NumKind::F32),
        Scalar::F32(2_147_483_648.0)
    );
    assert_eq!(
        cast_scalar(Scalar::I64(i64::MAX), NumKind::F64),
        Scalar::F64(9_223_372_036_854_775_808.0)
    );
}

#[test]
fn test_integer_narrowing_keeps_low_bits() {
    assert_eq!(cast_scalar(Scalar::I64(4_294_967_297), NumKind::I32), Scalar::I32(1));
    assert_eq!(cast_scalar(Scalar::I64(-1), NumKind::I32), Scalar::I32(-1));
    assert_eq!(cast_scalar(Scalar::I32(-5), NumKind::I64), Scalar::I64(-5));
}

#[test]
fn test_double_to_float_overflows_to_infinity() {
    assert_eq!(
        cast_scalar(Scalar::F64(1e40), NumKind::F32),
        Scalar::F32(f32::INFINITY)
    );
}

#[test]
fn test_identity_cast_is_structural() {
    assert_eq!(
        evaluate(&Operation::cast(1_i32, NumKind::I32)),
        Err(StructuralError::IdentityCast { kind: NumKind::I32 })
    );
}
