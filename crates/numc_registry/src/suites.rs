//! The built-in suites.
//!
//! Each expectation is the exact IEEE-754 or two's-complement result.
//! Remainder results are exact (`fmod` never rounds), so `5.3 % 2.0` is the
//! binary64 `5.3` minus 4, which prints as `1.2999999999999998`, not `1.3`.

use std::ops::Neg;

use numc_ir::{CompareOp, ExpectedResult, NumKind, Operation, Scalar};

use crate::{RegistryError, Suite, SuiteBuilder};

pub const DOUBLE_REMAINDER: &str = "double-remainder";
pub const FLOAT_REMAINDER: &str = "float-remainder";
pub const INTEGER_EDGE: &str = "integer-edge";
pub const FLOAT_EDGE: &str = "float-edge";
pub const NARROWING_CAST: &str = "narrowing-cast";

pub(crate) fn all() -> Result<Vec<Suite>, RegistryError> {
    Ok(vec![
        remainder_suite::<f64>(DOUBLE_REMAINDER)?,
        remainder_suite::<f32>(FLOAT_REMAINDER)?,
        integer_edge_suite()?,
        float_edge_suite()?,
        narrowing_cast_suite()?,
    ])
}

/// Constants needed to state the remainder suite at one float width.
trait RemainderWidth: Copy + Into<Scalar> + Neg<Output = Self> {
    const DIVIDEND: Self;
    const DIVISOR: Self;
    const ZERO: Self;
    const NAN: Self;
    const INFINITY: Self;
    /// `DIVIDEND % DIVISOR`, exactly.
    const REMAINDER: Self;
}

impl RemainderWidth for f64 {
    const DIVIDEND: Self = 5.3;
    const DIVISOR: Self = 2.0;
    const ZERO: Self = 0.0;
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    // 0x3FF4_CCCC_CCCC_CCCC, one ulp below 1.3
    const REMAINDER: Self = 1.299_999_999_999_999_8;
}

impl RemainderWidth for f32 {
    const DIVIDEND: Self = 5.3;
    const DIVISOR: Self = 2.0;
    const ZERO: Self = 0.0;
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    // 0x3FA6_6668, two ulps above 1.3
    const REMAINDER: Self = 1.300_000_2;
}

fn remainder_suite<F: RemainderWidth>(name: &str) -> Result<Suite, RegistryError> {
    SuiteBuilder::new(name)
        .case(
            "positive_operands",
            Operation::rem(F::DIVIDEND, F::DIVISOR),
            ExpectedResult::numeric(F::REMAINDER),
        )
        .case(
            "negative_dividend",
            Operation::rem(-F::DIVIDEND, F::DIVISOR),
            ExpectedResult::numeric(-F::REMAINDER),
        )
        .case(
            "negative_divisor",
            Operation::rem(F::DIVIDEND, -F::DIVISOR),
            ExpectedResult::numeric(F::REMAINDER),
        )
        .case(
            "nan_dividend",
            Operation::rem(F::NAN, F::DIVISOR),
            ExpectedResult::NAN,
        )
        .case(
            "zero_divisor",
            Operation::rem(F::DIVIDEND, F::ZERO),
            ExpectedResult::NAN,
        )
        .case(
            "zero_dividend",
            Operation::rem(F::ZERO, F::DIVISOR),
            ExpectedResult::numeric(F::ZERO),
        )
        .case(
            "negative_zero_dividend",
            Operation::rem(-F::ZERO, F::DIVISOR),
            ExpectedResult::numeric(-F::ZERO),
        )
        .case(
            "infinite_divisor",
            Operation::rem(F::DIVIDEND, F::INFINITY),
            ExpectedResult::numeric(F::DIVIDEND),
        )
        .case(
            "infinite_dividend",
            Operation::rem(F::INFINITY, F::DIVISOR),
            ExpectedResult::NAN,
        )
        .case(
            "negative_infinite_dividend",
            Operation::rem(-F::INFINITY, F::DIVISOR),
            ExpectedResult::NAN,
        )
        .finish()
}

fn integer_edge_suite() -> Result<Suite, RegistryError> {
    SuiteBuilder::new(INTEGER_EDGE)
        .case(
            "i32_max_plus_one",
            Operation::add(i32::MAX, 1_i32),
            ExpectedResult::numeric(i32::MIN),
        )
        .case(
            "i32_min_minus_one",
            Operation::sub(i32::MIN, 1_i32),
            ExpectedResult::numeric(i32::MAX),
        )
        .case(
            "i64_max_plus_one",
            Operation::add(i64::MAX, 1_i64),
            ExpectedResult::numeric(i64::MIN),
        )
        .case(
            "i64_min_minus_one",
            Operation::sub(i64::MIN, 1_i64),
            ExpectedResult::numeric(i64::MAX),
        )
        .case(
            "i32_min_div_neg_one",
            Operation::div(i32::MIN, -1_i32),
            ExpectedResult::numeric(i32::MIN),
        )
        .case(
            "i32_min_rem_neg_one",
            Operation::rem(i32::MIN, -1_i32),
            ExpectedResult::numeric(0_i32),
        )
        .case(
            "i64_min_div_neg_one",
            Operation::div(i64::MIN, -1_i64),
            ExpectedResult::numeric(i64::MIN),
        )
        .case(
            "negative_dividend_rem",
            Operation::rem(-7_i32, 2_i32),
            ExpectedResult::numeric(-1_i32),
        )
        .case(
            "division_truncates",
            Operation::div(-7_i64, 2_i64),
            ExpectedResult::numeric(-3_i64),
        )
        .finish()
}

fn float_edge_suite() -> Result<Suite, RegistryError> {
    SuiteBuilder::new(FLOAT_EDGE)
        .case(
            "nan_eq_nan",
            Operation::cmp(CompareOp::Eq, f32::NAN, f32::NAN),
            ExpectedResult::FALSE,
        )
        .case(
            "nan_ne_nan",
            Operation::cmp(CompareOp::NotEq, f32::NAN, f32::NAN),
            ExpectedResult::TRUE,
        )
        .case(
            "nan_lt_nan",
            Operation::cmp(CompareOp::Lt, f64::NAN, f64::NAN),
            ExpectedResult::FALSE,
        )
        .case(
            "nan_ge_nan",
            Operation::cmp(CompareOp::GtEq, f64::NAN, f64::NAN),
            ExpectedResult::FALSE,
        )
        .case(
            "nan_le_one",
            Operation::cmp(CompareOp::LtEq, f64::NAN, 1.0_f64),
            ExpectedResult::FALSE,
        )
        .case(
            "infinity_gt_max_literal",
            Operation::cmp(CompareOp::Gt, f64::INFINITY, 1e308_f64),
            ExpectedResult::TRUE,
        )
        .case(
            "zero_eq_negative_zero",
            Operation::cmp(CompareOp::Eq, 0.0_f64, -0.0_f64),
            ExpectedResult::TRUE,
        )
        .case(
            "zero_div_zero",
            Operation::div(0.0_f64, 0.0_f64),
            ExpectedResult::NAN,
        )
        .case(
            "one_div_zero",
            Operation::div(1.0_f64, 0.0_f64),
            ExpectedResult::POS_INFINITY,
        )
        .case(
            "neg_one_div_zero",
            Operation::div(-1.0_f64, 0.0_f64),
            ExpectedResult::NEG_INFINITY,
        )
        .case(
            "one_div_negative_zero",
            Operation::div(1.0_f64, -0.0_f64),
            ExpectedResult::NEG_INFINITY,
        )
        .case(
            "float_zero_div_zero",
            Operation::div(0.0_f32, 0.0_f32),
            ExpectedResult::NAN,
        )
        .finish()
}

fn narrowing_cast_suite() -> Result<Suite, RegistryError> {
    SuiteBuilder::new(NARROWING_CAST)
        .case(
            "i32_max_to_f32",
            Operation::cast(i32::MAX, NumKind::F32),
            ExpectedResult::numeric(2_147_483_648.0_f32),
        )
        .case(
            "i64_max_to_f64",
            Operation::cast(i64::MAX, NumKind::F64),
            ExpectedResult::numeric(9_223_372_036_854_775_808.0_f64),
        )
        .case(
            "fraction_to_i32",
            Operation::cast(123.456_f64, NumKind::I32),
            ExpectedResult::numeric(123_i32),
        )
        .case(
            "negative_fraction_to_i32",
            Operation::cast(-123.456_f64, NumKind::I32),
            ExpectedResult::numeric(-123_i32),
        )
        .case(
            "nan_to_i32",
            Operation::cast(f64::NAN, NumKind::I32),
            ExpectedResult::numeric(0_i32),
        )
        .case(
            "infinity_to_i32",
            Operation::cast(f64::INFINITY, NumKind::I32),
            ExpectedResult::numeric(i32::MAX),
        )
        .case(
            "negative_infinity_to_i32",
            Operation::cast(f64::NEG_INFINITY, NumKind::I32),
            ExpectedResult::numeric(i32::MIN),
        )
        .case(
            "nan_to_i64",
            Operation::cast(f64::NAN, NumKind::I64),
            ExpectedResult::numeric(0_i64),
        )
        .case(
            "infinity_to_i64",
            Operation::cast(f64::INFINITY, NumKind::I64),
            ExpectedResult::numeric(i64::MAX),
        )
        .case(
            "negative_infinity_to_i64",
            Operation::cast(f64::NEG_INFINITY, NumKind::I64),
            ExpectedResult::numeric(i64::MIN),
        )
        .case(
            "float_nan_to_i32",
            Operation::cast(f32::NAN, NumKind::I32),
            ExpectedResult::numeric(0_i32),
        )
        .case(
            "out_of_range_to_i32",
            Operation::cast(1e10_f64, NumKind::I32),
            ExpectedResult::numeric(i32::MAX),
        )
        .case(
            "i64_to_i32_keeps_low_bits",
            Operation::cast(4_294_967_297_i64, NumKind::I32),
            ExpectedResult::numeric(1_i32),
        )
        .case(
            "large_double_to_f32",
            Operation::cast(1e40_f64, NumKind::F32),
            ExpectedResult::POS_INFINITY,
        )
        .finish()
}
