//! Width-tagged numeric operands.
//!
//! Every operand carries its `NumKind` so no evaluator has to consult
//! host coercion tables: a case that adds an `i32` to an `i64` is malformed,
//! not silently promoted.

use std::fmt;

/// Width and kind of a numeric operand or result.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumKind {
    /// 32-bit two's-complement signed integer.
    I32,
    /// 64-bit two's-complement signed integer.
    I64,
    /// IEEE-754 binary32.
    F32,
    /// IEEE-754 binary64.
    F64,
}

impl NumKind {
    /// All kinds, narrowest integer first.
    pub const ALL: [NumKind; 4] = [Self::I32, Self::I64, Self::F32, Self::F64];

    pub const fn is_integer(self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Literal suffix used in renderings (`i32`, `f64`, ...).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for NumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Classification of a numeric value, independent of its bit pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Classification {
    Nan,
    PosInfinity,
    NegInfinity,
    Finite,
}

/// A numeric value tagged with its width.
///
/// Equality is bit-for-bit: `F64(0.0) != F64(-0.0)` and `F32(NaN) == F32(NaN)`
/// when the payloads agree. Use [`Scalar::classify`] for NaN-insensitive checks.
#[derive(Copy, Clone, Debug)]
pub enum Scalar {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub const fn kind(self) -> NumKind {
        match self {
            Self::I32(_) => NumKind::I32,
            Self::I64(_) => NumKind::I64,
            Self::F32(_) => NumKind::F32,
            Self::F64(_) => NumKind::F64,
        }
    }

    pub fn classify(self) -> Classification {
        match self {
            Self::I32(_) | Self::I64(_) => Classification::Finite,
            Self::F32(v) => classify_float(v.is_nan(), v.is_infinite(), v.is_sign_positive()),
            Self::F64(v) => classify_float(v.is_nan(), v.is_infinite(), v.is_sign_positive()),
        }
    }

    pub fn is_finite(self) -> bool {
        self.classify() == Classification::Finite
    }

    /// Returns true for integer zero and for both float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Self::I32(v) => v == 0,
            Self::I64(v) => v == 0,
            Self::F32(v) => v == 0.0,
            Self::F64(v) => v == 0.0,
        }
    }

    /// Raw bit pattern, zero-extended to 64 bits.
    ///
    /// Integers report their two's-complement encoding at their own width,
    /// so `I32(-1)` is `0xFFFF_FFFF`, not `u64::MAX`.
    pub fn to_bits(self) -> u64 {
        match self {
            Self::I32(v) => u64::from(u32::from_ne_bytes(v.to_ne_bytes())),
            Self::I64(v) => u64::from_ne_bytes(v.to_ne_bytes()),
            Self::F32(v) => u64::from(v.to_bits()),
            Self::F64(v) => v.to_bits(),
        }
    }
}

fn classify_float(nan: bool, infinite: bool, positive: bool) -> Classification {
    match (nan, infinite, positive) {
        (true, _, _) => Classification::Nan,
        (false, true, true) => Classification::PosInfinity,
        (false, true, false) => Classification::NegInfinity,
        (false, false, _) => Classification::Finite,
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.to_bits() == other.to_bits()
    }
}

impl Eq for Scalar {}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            Classification::Nan => return f.write_str("NaN"),
            Classification::PosInfinity => return f.write_str("+Infinity"),
            Classification::NegInfinity => return f.write_str("-Infinity"),
            Classification::Finite => {}
        }
        match self {
            Self::I32(v) => write!(f, "{v}i32"),
            Self::I64(v) => write!(f, "{v}i64"),
            // Debug keeps the trailing `.0` and the sign of negative zero.
            Self::F32(v) => write!(f, "{v:?}f32"),
            Self::F64(v) => write!(f, "{v:?}f64"),
        }
    }
}

/// Result of evaluating an operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(Scalar),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => fmt::Display::fmt(s, f),
            Self::Bool(b) => fmt::Display::fmt(b, f),
        }
    }
}
