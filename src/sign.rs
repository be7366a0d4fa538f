/*
    Sign determination
*/

use std::ops::{Mul, Neg};

use tracing::debug;

use crate::{decimal::Decimal, Number, RoundingError, RoundingResult};

/// The sign of a number, `+1` or `-1`.
///
/// There is no zero sign: a zero, an infinity, or a NaN is positive
/// or negative according to its sign bit alone.
#[repr(i8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Sign bit set.
    Neg = -1,
    /// Sign bit unset.
    Pos = 1,
}

impl Sign {
    /// Returns the sign of a real number.
    ///
    /// The sign of a NaN is read from its sign bit like any other value.
    pub fn of<N: Number>(x: &N) -> Self {
        Self::from_bit(x.sign())
    }

    /// Converts a sign bit (true when negative) to a `Sign`.
    pub const fn from_bit(sign: bool) -> Self {
        if sign {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns the sign bit: true when negative.
    pub const fn to_bit(self) -> bool {
        matches!(self, Sign::Neg)
    }

    /// Returns `+1` or `-1`.
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Converts `+1` or `-1` to a `Sign`.
    pub const fn from_i8(v: i8) -> Option<Sign> {
        match v {
            1 => Some(Sign::Pos),
            -1 => Some(Sign::Neg),
            _ => None,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        Sign::from_bit(!self.to_bit())
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        Sign::from_bit(self.to_bit() != rhs.to_bit())
    }
}

/// Any operand the sign of which may be asked for.
///
/// Only real operands have a sign; a complex operand is rejected
/// even when its imaginary part is zero.
#[derive(Copy, Clone, Debug)]
pub enum Operand<'a> {
    /// A double-precision binary float.
    Double(f64),
    /// A single-precision binary float.
    Single(f32),
    /// An arbitrary-precision decimal.
    Decimal(&'a Decimal),
    /// A complex number with binary float parts.
    Complex { re: f64, im: f64 },
}

impl From<f64> for Operand<'_> {
    fn from(f: f64) -> Self {
        Operand::Double(f)
    }
}

impl From<f32> for Operand<'_> {
    fn from(f: f32) -> Self {
        Operand::Single(f)
    }
}

impl<'a> From<&'a Decimal> for Operand<'a> {
    fn from(d: &'a Decimal) -> Self {
        Operand::Decimal(d)
    }
}

/// Returns the sign of `x` as given by its sign bit.
///
/// Positive zero, positive infinity and NaNs with the sign bit unset
/// are `Sign::Pos`; their negative counterparts are `Sign::Neg`.
/// Fails with `RoundingError::InvalidOperand` if `x` is not real.
pub fn sign<'a>(x: impl Into<Operand<'a>>) -> RoundingResult<Sign> {
    match x.into() {
        Operand::Double(f) => Ok(Sign::of(&f)),
        Operand::Single(f) => Ok(Sign::of(&f)),
        Operand::Decimal(d) => Ok(Sign::of(d)),
        Operand::Complex { re, im } => {
            debug!(re, im, "sign of a complex operand is undefined");
            Err(RoundingError::InvalidOperand)
        }
    }
}
