use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_output_kind() {
    assert_eq!(
        Operation::rem(5.3_f64, 2.0_f64).output_kind(),
        OutputKind::Numeric(NumKind::F64)
    );
    assert_eq!(
        Operation::cmp(CompareOp::Eq, f32::NAN, f32::NAN).output_kind(),
        OutputKind::Boolean
    );
    assert_eq!(
        Operation::cast(f64::NAN, NumKind::I64).output_kind(),
        OutputKind::Numeric(NumKind::I64)
    );
}

#[test]
fn test_validate_accepts_well_formed() {
    assert_eq!(
        Operation::add(i32::MAX, 1_i32).validate(),
        Ok(OutputKind::Numeric(NumKind::I32))
    );
    assert_eq!(
        Operation::div(1.0_f64, 0.0_f64).validate(),
        Ok(OutputKind::Numeric(NumKind::F64))
    );
    assert_eq!(
        Operation::rem(i32::MIN, -1_i32).validate(),
        Ok(OutputKind::Numeric(NumKind::I32))
    );
}

#[test]
fn test_validate_rejects_mixed_kinds() {
    assert_eq!(
        Operation::add(1_i32, 1_i64).validate(),
        Err(StructuralError::OperandKindMismatch {
            op: "+",
            lhs: NumKind::I32,
            rhs: NumKind::I64,
        })
    );
    assert!(Operation::cmp(CompareOp::Lt, 1.0_f32, 1.0_f64).validate().is_err());
}

#[test]
fn test_validate_rejects_float_add() {
    assert_eq!(
        Operation::sub(1.0_f64, 1.0_f64).validate(),
        Err(StructuralError::IntegerOperandRequired {
            op: "-",
            kind: NumKind::F64,
        })
    );
}

#[test]
fn test_validate_rejects_integer_zero_divisor() {
    assert_eq!(
        Operation::div(1_i64, 0_i64).validate(),
        Err(StructuralError::ZeroIntegerDivisor { op: "/" })
    );
    assert_eq!(
        Operation::rem(1_i32, 0_i32).validate(),
        Err(StructuralError::ZeroIntegerDivisor { op: "%" })
    );
    // Float division by zero is total.
    assert!(Operation::rem(5.3_f32, 0.0_f32).validate().is_ok());
}

#[test]
fn test_validate_rejects_identity_cast() {
    assert_eq!(
        Operation::cast(1.0_f32, NumKind::F32).validate(),
        Err(StructuralError::IdentityCast { kind: NumKind::F32 })
    );
}

#[test]
fn test_display() {
    assert_eq!(Operation::rem(5.3_f64, 2.0_f64).to_string(), "5.3f64 % 2.0f64");
    assert_eq!(
        Operation::add(i32::MAX, 1_i32).to_string(),
        "2147483647i32 + 1i32"
    );
    assert_eq!(
        Operation::cmp(CompareOp::NotEq, f64::NAN, f64::NAN).to_string(),
        "NaN != NaN"
    );
    assert_eq!(
        Operation::cast(f64::NEG_INFINITY, NumKind::I32).to_string(),
        "(i32) -Infinity"
    );
}
