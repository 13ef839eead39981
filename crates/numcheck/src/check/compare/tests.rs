use numc_ir::{ExpectedResult, Scalar};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn specials_match_by_classification() {
    assert_eq!(compare(&ExpectedResult::NAN, &ExpectedResult::NAN), Verdict::Match);
    assert_eq!(
        compare(&ExpectedResult::POS_INFINITY, &ExpectedResult::NEG_INFINITY),
        Verdict::ValueMismatch
    );
}

#[test]
fn any_nan_encoding_classifies_as_nan() {
    let quiet = Scalar::F64(f64::NAN);
    let payload = Scalar::F64(f64::from_bits(0x7FF8_0000_0000_0001));
    let actual = ExpectedResult::classify(numc_ir::Value::Scalar(payload));
    assert_eq!(compare(&ExpectedResult::NAN, &actual), Verdict::Match);
    assert_eq!(
        ExpectedResult::classify(numc_ir::Value::Scalar(quiet)),
        actual
    );
}

#[test]
fn floats_compare_bitwise() {
    let exact = ExpectedResult::numeric(1.299_999_999_999_999_8_f64);
    let rounded = ExpectedResult::numeric(1.3_f64);
    assert_eq!(compare(&exact, &exact), Verdict::Match);
    assert_eq!(compare(&rounded, &exact), Verdict::ValueMismatch);
}

#[test]
fn zero_sign_is_significant() {
    assert_eq!(
        compare(
            &ExpectedResult::numeric(-0.0_f64),
            &ExpectedResult::numeric(0.0_f64)
        ),
        Verdict::ValueMismatch
    );
}

#[test]
fn integers_compare_by_value() {
    assert_eq!(
        compare(
            &ExpectedResult::numeric(i32::MIN),
            &ExpectedResult::numeric(i32::MIN)
        ),
        Verdict::Match
    );
    assert_eq!(
        compare(&ExpectedResult::numeric(1_i64), &ExpectedResult::numeric(2_i64)),
        Verdict::ValueMismatch
    );
}

#[test]
fn width_mismatch_is_structural() {
    assert_eq!(
        compare(&ExpectedResult::numeric(1_i32), &ExpectedResult::numeric(1_i64)),
        Verdict::Structural
    );
    assert_eq!(
        compare(
            &ExpectedResult::numeric(1.0_f32),
            &ExpectedResult::numeric(1.0_f64)
        ),
        Verdict::Structural
    );
}

#[test]
fn special_against_float_is_value_mismatch() {
    assert_eq!(
        compare(&ExpectedResult::numeric(1.3_f64), &ExpectedResult::NAN),
        Verdict::ValueMismatch
    );
    assert_eq!(
        compare(&ExpectedResult::POS_INFINITY, &ExpectedResult::numeric(3.0_f32)),
        Verdict::ValueMismatch
    );
}

#[test]
fn special_against_integer_is_structural() {
    assert_eq!(
        compare(&ExpectedResult::NAN, &ExpectedResult::numeric(0_i32)),
        Verdict::Structural
    );
}

#[test]
fn boolean_against_number_is_structural() {
    assert_eq!(
        compare(&ExpectedResult::TRUE, &ExpectedResult::numeric(1_i32)),
        Verdict::Structural
    );
    assert_eq!(
        compare(&ExpectedResult::numeric(0.0_f64), &ExpectedResult::FALSE),
        Verdict::Structural
    );
    assert_eq!(
        compare(&ExpectedResult::NAN, &ExpectedResult::FALSE),
        Verdict::Structural
    );
}

#[test]
fn booleans_compare_by_value() {
    assert_eq!(compare(&ExpectedResult::TRUE, &ExpectedResult::TRUE), Verdict::Match);
    assert_eq!(
        compare(&ExpectedResult::FALSE, &ExpectedResult::TRUE),
        Verdict::ValueMismatch
    );
}
