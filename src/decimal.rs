/*
    Arbitrary-precision decimal numbers
*/

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_traits::Zero;

mod number;
mod round;

pub use round::*;

// Minimal decimal encoding grouped by classification
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum DecimalNum {
    // signed zero or finite number
    // => (sign, exponent, coefficient) for `(-1)^s * c * 10^exp`
    Number(bool, i64, BigUint),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, signaling, payload)
    Nan(bool, bool, BigUint),
}

/// An arbitrary-precision decimal number.
///
/// A `Decimal` is either a finite number `(-1)^s * c * 10^exp` with an
/// unbounded integer coefficient `c`, a signed infinity, or a signed NaN
/// (quiet or signaling, with an integer payload). Zeros are signed and
/// keep their exponent.
///
/// Equality is equality of representation: `2.0` (`20 * 10^-1`) and `2`
/// differ, `-0` and `+0` differ, and two NaNs with the same sign,
/// signaling status and payload are equal. See
/// [`Decimal::numerically_eq`] for equality of value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    num: DecimalNum,
}

// Constructors and getters
impl Decimal {
    /// Creates the finite number `(-1)^sign * coefficient * 10^exponent`.
    pub fn new(sign: bool, coefficient: impl Into<BigUint>, exponent: i64) -> Self {
        Self {
            num: DecimalNum::Number(sign, exponent, coefficient.into()),
        }
    }

    /// Returns a zero with a particular sign.
    pub fn zero(sign: bool) -> Self {
        Self::new(sign, BigUint::zero(), 0)
    }

    /// Returns an infinity with a particular sign.
    pub fn infinity(sign: bool) -> Self {
        Self {
            num: DecimalNum::Infinity(sign),
        }
    }

    /// Returns a NaN with a particular sign, signaling status and payload.
    pub fn nan(sign: bool, signaling: bool, payload: impl Into<BigUint>) -> Self {
        Self {
            num: DecimalNum::Nan(sign, signaling, payload.into()),
        }
    }

    /// Returns the sign bit of this `Decimal`: true when negative.
    pub fn sign(&self) -> bool {
        match self.num {
            DecimalNum::Number(s, _, _) => s,
            DecimalNum::Infinity(s) => s,
            DecimalNum::Nan(s, _, _) => s,
        }
    }

    /// Returns the exponent of this `Decimal`.
    /// The result is wrapped in an option since only finite
    /// numbers have an exponent.
    pub fn exponent(&self) -> Option<i64> {
        match self.num {
            DecimalNum::Number(_, exp, _) => Some(exp),
            _ => None,
        }
    }

    /// Returns the (integer) coefficient of this `Decimal`.
    /// The result is wrapped in an option since only finite
    /// numbers have a coefficient.
    pub fn coefficient(&self) -> Option<&BigUint> {
        match &self.num {
            DecimalNum::Number(_, _, c) => Some(c),
            _ => None,
        }
    }

    /// Returns true if this `Decimal` encodes a signaling NaN.
    /// The result is wrapped in an option since only NaNs can be signaling.
    pub fn is_signaling_nan(&self) -> Option<bool> {
        match self.num {
            DecimalNum::Nan(_, signal, _) => Some(signal),
            _ => None,
        }
    }

    /// Returns the NaN payload of this `Decimal`.
    /// The result is wrapped in an option since only a NaN has a payload.
    pub fn nan_payload(&self) -> Option<&BigUint> {
        match &self.num {
            DecimalNum::Nan(_, _, payload) => Some(payload),
            _ => None,
        }
    }

    /// Returns true if this `Decimal` and `other` encode the same value.
    ///
    /// Finite numbers are compared by value regardless of exponent, so
    /// `2.0` equals `2`; zeros are equal regardless of sign. Infinities
    /// are equal when their signs agree. A NaN is never equal to anything.
    pub fn numerically_eq(&self, other: &Self) -> bool {
        match (&self.num, &other.num) {
            (DecimalNum::Number(s1, e1, c1), DecimalNum::Number(s2, e2, c2)) => {
                if c1.is_zero() || c2.is_zero() {
                    c1.is_zero() && c2.is_zero()
                } else if s1 != s2 {
                    false
                } else {
                    // scale the coefficient with the larger exponent
                    // down to the smaller exponent
                    match e1.cmp(e2) {
                        Ordering::Equal => c1 == c2,
                        Ordering::Greater => scale(c1, e1.abs_diff(*e2)).as_ref() == Some(c2),
                        Ordering::Less => scale(c2, e2.abs_diff(*e1)).as_ref() == Some(c1),
                    }
                }
            }
            (DecimalNum::Infinity(s1), DecimalNum::Infinity(s2)) => s1 == s2,
            _ => false,
        }
    }
}

// Returns `c * 10^by`, or `None` if the power of ten
// does not fit in an exponent for `BigUint::pow`.
fn scale(c: &BigUint, by: u64) -> Option<BigUint> {
    let by = u32::try_from(by).ok()?;
    Some(c * BigUint::from(10u32).pow(by))
}

// Implementing `Default` for `Decimal`
impl Default for Decimal {
    fn default() -> Self {
        Self::zero(false)
    }
}

impl From<i64> for Decimal {
    fn from(i: i64) -> Self {
        Self::new(i < 0, i.unsigned_abs(), 0)
    }
}

impl From<BigInt> for Decimal {
    fn from(i: BigInt) -> Self {
        let (s, c) = i.into_parts();
        Self::new(s == BigSign::Minus, c, 0)
    }
}
