//! Expected (and classified actual) results.

use std::fmt;

use crate::{Classification, OutputKind, Scalar, StructuralError, Value};

/// Non-finite float results, compared by classification only.
///
/// NaN has many encodings; a case that expects NaN is satisfied by any of them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SpecialValue {
    Nan,
    PosInfinity,
    NegInfinity,
}

impl fmt::Display for SpecialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nan => "NaN",
            Self::PosInfinity => "+Infinity",
            Self::NegInfinity => "-Infinity",
        })
    }
}

/// What a case must produce.
///
/// Actual results are classified into the same shape (see [`ExpectedResult::classify`])
/// so expectation and observation compare variant by variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExpectedResult {
    /// A finite number, compared bit-for-bit (floats) or by value (integers).
    Numeric(Scalar),
    /// NaN or an infinity, compared by classification.
    Special(SpecialValue),
    /// Result of a comparison.
    Boolean(bool),
}

/// The variant of an [`ExpectedResult`], without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResultShape {
    Numeric,
    Special,
    Boolean,
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::Special => "special",
            Self::Boolean => "boolean",
        })
    }
}

impl ExpectedResult {
    pub const NAN: Self = Self::Special(SpecialValue::Nan);
    pub const POS_INFINITY: Self = Self::Special(SpecialValue::PosInfinity);
    pub const NEG_INFINITY: Self = Self::Special(SpecialValue::NegInfinity);
    pub const TRUE: Self = Self::Boolean(true);
    pub const FALSE: Self = Self::Boolean(false);

    pub fn numeric(value: impl Into<Scalar>) -> Self {
        Self::Numeric(value.into())
    }

    /// Classify an evaluated value into expectation shape.
    ///
    /// Non-finite floats become `Special`, so a NaN never lands in `Numeric`.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Bool(b) => Self::Boolean(b),
            Value::Scalar(s) => match s.classify() {
                Classification::Nan => Self::NAN,
                Classification::PosInfinity => Self::POS_INFINITY,
                Classification::NegInfinity => Self::NEG_INFINITY,
                Classification::Finite => Self::Numeric(s),
            },
        }
    }

    pub fn shape(&self) -> ResultShape {
        match self {
            Self::Numeric(_) => ResultShape::Numeric,
            Self::Special(_) => ResultShape::Special,
            Self::Boolean(_) => ResultShape::Boolean,
        }
    }

    /// Check this expectation can be produced by an operation with `output` kind.
    ///
    /// Booleans pair only with comparisons. Numeric expectations must be finite
    /// and match the output width exactly. Specials pair only with float outputs.
    pub fn check_compatible(&self, output: OutputKind) -> Result<(), StructuralError> {
        let compatible = match (*self, output) {
            (Self::Boolean(_), OutputKind::Boolean) => true,
            (Self::Numeric(s), OutputKind::Numeric(kind)) => {
                if !s.is_finite() {
                    return Err(StructuralError::NonFiniteNumeric { expected: *self });
                }
                s.kind() == kind
            }
            (Self::Special(_), OutputKind::Numeric(kind)) => kind.is_float(),
            _ => false,
        };
        if compatible {
            Ok(())
        } else {
            Err(StructuralError::IncompatibleExpectation {
                expected: *self,
                output,
            })
        }
    }
}

impl fmt::Display for ExpectedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(s) => fmt::Display::fmt(s, f),
            Self::Special(v) => fmt::Display::fmt(v, f),
            Self::Boolean(b) => fmt::Display::fmt(b, f),
        }
    }
}

#[cfg(test)]
mod tests;
