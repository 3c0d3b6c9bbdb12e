//! Arithmetic and comparison operators.
//!
//! Arithmetic lives on expressions; comparison only appears as the test of a
//! `Conditional`, so the two sets are kept apart instead of sharing one enum.

/// Arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Exponentiation.
    Pow,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// Comparison operators used by `Conditional`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// The host language shares these spellings, so the emitter uses them too.
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

    /// Apply the comparison to two values.
    ///
    /// Follows IEEE-754: every comparison involving NaN is false except `!=`.
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::NotEq => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::LtEq => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::GtEq => lhs >= rhs,
        }
    }
}
