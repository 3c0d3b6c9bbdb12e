use std::fmt;

/// A numeric literal stored as its IEEE-754 bit pattern.
///
/// Storing bits lets the tree derive `Eq` and `Hash`. Two constants are
/// equal iff their bits are equal, so `NaN == NaN` and `0.0 != -0.0` at the
/// tree level. Arithmetic always goes through [`Number::get`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Number(u64);

impl Number {
    #[inline]
    pub fn new(value: f64) -> Self {
        Number(value.to_bits())
    }

    #[inline]
    pub fn get(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::new(value)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.get())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.get())
    }
}
