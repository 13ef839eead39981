use super::*;
use crate::NumKind;
use pretty_assertions::assert_eq;

#[test]
fn test_classify_specials() {
    assert_eq!(
        ExpectedResult::classify(Value::Scalar(Scalar::F64(f64::NAN))),
        ExpectedResult::NAN
    );
    assert_eq!(
        ExpectedResult::classify(Value::Scalar(Scalar::F32(f32::INFINITY))),
        ExpectedResult::POS_INFINITY
    );
    assert_eq!(
        ExpectedResult::classify(Value::Scalar(Scalar::F64(f64::NEG_INFINITY))),
        ExpectedResult::NEG_INFINITY
    );
}

#[test]
fn test_classify_finite_and_bool() {
    assert_eq!(
        ExpectedResult::classify(Value::Scalar(Scalar::F64(-0.0))),
        ExpectedResult::numeric(-0.0_f64)
    );
    assert_eq!(
        ExpectedResult::classify(Value::Scalar(Scalar::I32(5))),
        ExpectedResult::numeric(5_i32)
    );
    assert_eq!(ExpectedResult::classify(Value::Bool(true)), ExpectedResult::TRUE);
}

#[test]
fn test_shape() {
    assert_eq!(ExpectedResult::NAN.shape(), ResultShape::Special);
    assert_eq!(ExpectedResult::FALSE.shape(), ResultShape::Boolean);
    assert_eq!(ExpectedResult::numeric(1_i64).shape(), ResultShape::Numeric);
}

#[test]
fn test_compatibility() {
    let f64_out = OutputKind::Numeric(NumKind::F64);
    let i32_out = OutputKind::Numeric(NumKind::I32);

    assert!(ExpectedResult::numeric(1.5_f64).check_compatible(f64_out).is_ok());
    assert!(ExpectedResult::NAN.check_compatible(f64_out).is_ok());
    assert!(ExpectedResult::TRUE.check_compatible(OutputKind::Boolean).is_ok());
    assert!(ExpectedResult::numeric(0_i32).check_compatible(i32_out).is_ok());

    assert_eq!(
        ExpectedResult::TRUE.check_compatible(f64_out),
        Err(StructuralError::IncompatibleExpectation {
            expected: ExpectedResult::TRUE,
            output: f64_out,
        })
    );
    assert!(ExpectedResult::NAN.check_compatible(i32_out).is_err());
    assert!(ExpectedResult::numeric(1.5_f32).check_compatible(f64_out).is_err());
    assert!(ExpectedResult::numeric(1_i32).check_compatible(OutputKind::Boolean).is_err());
}

#[test]
fn test_non_finite_numeric_is_rejected() {
    let expected = ExpectedResult::numeric(f64::INFINITY);
    assert_eq!(
        expected.check_compatible(OutputKind::Numeric(NumKind::F64)),
        Err(StructuralError::NonFiniteNumeric { expected })
    );
}

#[test]
fn test_display() {
    assert_eq!(ExpectedResult::NAN.to_string(), "NaN");
    assert_eq!(ExpectedResult::NEG_INFINITY.to_string(), "-Infinity");
    assert_eq!(ExpectedResult::numeric(i64::MAX).to_string(), "9223372036854775807i64");
    assert_eq!(ExpectedResult::FALSE.to_string(), "false");
}
