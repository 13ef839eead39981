//! Operation descriptors.
//!
//! An `Operation` names one fixed-width numeric step together with its typed
//! operands. It says nothing about the result; pairing with an expectation
//! happens in the registry, evaluation happens in `numc_eval`.

use std::fmt;

use crate::{NumKind, Scalar, StructuralError};

/// Comparison operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

/// One numeric operation with width-tagged operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Operator-style remainder (`%`): the result takes the dividend's sign.
    Remainder { lhs: Scalar, rhs: Scalar },
    /// Two's-complement addition that wraps on overflow.
    IntegerAdd { lhs: Scalar, rhs: Scalar },
    /// Two's-complement subtraction that wraps on overflow.
    IntegerSub { lhs: Scalar, rhs: Scalar },
    /// Ordered or equality comparison producing a boolean.
    Comparison {
        op: CompareOp,
        lhs: Scalar,
        rhs: Scalar,
    },
    /// IEEE-754 division for floats, wrapping truncated division for integers.
    Division { lhs: Scalar, rhs: Scalar },
    /// Conversion from the source's kind to `target`.
    ///
    /// Float to integer truncates toward zero and saturates, NaN becomes 0.
    /// Integer to narrower integer keeps the low bits. Anything to float
    /// rounds to nearest.
    NarrowingCast { source: Scalar, target: NumKind },
}

/// Kind of value an operation can produce.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OutputKind {
    Numeric(NumKind),
    Boolean,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(kind) => write!(f, "{kind} value"),
            Self::Boolean => f.write_str("boolean"),
        }
    }
}

impl Operation {
    pub fn rem(lhs: impl Into<Scalar>, rhs: impl Into<Scalar>) -> Self {
        Self::Remainder {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn add(lhs: impl Into<Scalar>, rhs: impl Into<Scalar>) -> Self {
        Self::IntegerAdd {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn sub(lhs: impl Into<Scalar>, rhs: impl Into<Scalar>) -> Self {
        Self::IntegerSub {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn cmp(op: CompareOp, lhs: impl Into<Scalar>, rhs: impl Into<Scalar>) -> Self {
        Self::Comparison {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn div(lhs: impl Into<Scalar>, rhs: impl Into<Scalar>) -> Self {
        Self::Division {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn cast(source: impl Into<Scalar>, target: NumKind) -> Self {
        Self::NarrowingCast {
            source: source.into(),
            target,
        }
    }

    /// Source-level symbol of the operation (`%`, `+`, `(i32)`, ...).
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Remainder { .. } => "%",
            Self::IntegerAdd { .. } => "+",
            Self::IntegerSub { .. } => "-",
            Self::Comparison { op, .. } => op.as_symbol(),
            Self::Division { .. } => "/",
            Self::NarrowingCast { target, .. } => match target {
                NumKind::I32 => "(i32)",
                NumKind::I64 => "(i64)",
                NumKind::F32 => "(f32)",
                NumKind::F64 => "(f64)",
            },
        }
    }

    /// Kind of value this operation produces, assuming it is well-formed.
    pub fn output_kind(&self) -> OutputKind {
        match *self {
            Self::Remainder { lhs, .. }
            | Self::IntegerAdd { lhs, .. }
            | Self::IntegerSub { lhs, .. }
            | Self::Division { lhs, .. } => OutputKind::Numeric(lhs.kind()),
            Self::Comparison { .. } => OutputKind::Boolean,
            Self::NarrowingCast { target, .. } => OutputKind::Numeric(target),
        }
    }

    /// Check the operation is total and unambiguous, returning its output kind.
    pub fn validate(&self) -> Result<OutputKind, StructuralError> {
        match *self {
            Self::Remainder { lhs, rhs } | Self::Division { lhs, rhs } => {
                self.same_kind(lhs, rhs)?;
                if lhs.kind().is_integer() && rhs.is_zero() {
                    return Err(StructuralError::ZeroIntegerDivisor { op: self.symbol() });
                }
            }
            Self::IntegerAdd { lhs, rhs } | Self::IntegerSub { lhs, rhs } => {
                self.same_kind(lhs, rhs)?;
                if !lhs.kind().is_integer() {
                    return Err(StructuralError::IntegerOperandRequired {
                        op: self.symbol(),
                        kind: lhs.kind(),
                    });
                }
            }
            Self::Comparison { lhs, rhs, .. } => self.same_kind(lhs, rhs)?,
            Self::NarrowingCast { source, target } => {
                if source.kind() == target {
                    return Err(StructuralError::IdentityCast { kind: target });
                }
            }
        }
        Ok(self.output_kind())
    }

    fn same_kind(&self, lhs: Scalar, rhs: Scalar) -> Result<(), StructuralError> {
        if lhs.kind() == rhs.kind() {
            Ok(())
        } else {
            Err(StructuralError::OperandKindMismatch {
                op: self.symbol(),
                lhs: lhs.kind(),
                rhs: rhs.kind(),
            })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remainder { lhs, rhs }
            | Self::IntegerAdd { lhs, rhs }
            | Self::IntegerSub { lhs, rhs }
            | Self::Comparison { lhs, rhs, .. }
            | Self::Division { lhs, rhs } => write!(f, "{lhs} {} {rhs}", self.symbol()),
            Self::NarrowingCast { source, .. } => write!(f, "{} {source}", self.symbol()),
        }
    }
}

#[cfg(test)]
mod tests;
