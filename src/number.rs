/*
    Defines a number
*/

use num_bigint::BigUint;

/// The number type.
///
/// A `Number` is any real-valued representation that can be rounded
/// to an integer: binary floating-point (`f64`, `f32`) or
/// arbitrary-precision decimal ([`Decimal`](crate::decimal::Decimal)).
/// Every `Number` carries a sign bit that stays meaningful for zeros,
/// infinities, and NaNs.
pub trait Number: Clone {
    /// Returns true if this `Number` encodes a zero (of either sign).
    fn is_zero(&self) -> bool;

    /// Returns true if this `Number` encodes an infinity.
    fn is_infinity(&self) -> bool;

    /// Returns true if this `Number` does not encode a number.
    fn is_nan(&self) -> bool;

    /// Returns true if this `Number` encodes a finite number.
    fn is_finite(&self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    /// Returns the sign bit of this `Number`: true when negative.
    /// This is defined for every value, NaN included.
    fn sign(&self) -> bool;

    /// Splits a finite `Number` into its integer part and rounding bits.
    /// The result is wrapped in an option since only finite numbers
    /// have a magnitude.
    fn magnitude(&self) -> Option<Magnitude>;

    /// Returns true if this `Number` is finite and has no fractional part.
    fn is_integral(&self) -> bool {
        self.magnitude().is_some_and(|m| m.is_exact())
    }

    /// Builds the integer `(-1)^sign * integer` in this representation.
    /// A zero `integer` yields a zero carrying `sign`.
    fn from_magnitude(sign: bool, integer: &BigUint) -> Self;

    /// Returns the NaN that rounding should produce for this NaN.
    /// By default, the NaN is propagated unchanged.
    fn quiet(&self) -> Self {
        self.clone()
    }
}

/// The exact decomposition of a finite number `x` used by the
/// rounding core.
///
/// `|x| = integer + f` where `0 <= f < 1`. Rather than the whole
/// fractional part `f`, only two bits are kept:
///
///  - `half_bit`: `f >= 1/2`;
///  - `sticky_bit`: `f` is not exactly `0` or `1/2`.
///
/// Together with the sign and the integer part, these bits are
/// enough to decide every rounding mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Magnitude {
    sign: bool,
    integer: BigUint,
    half_bit: bool,
    sticky_bit: bool,
}

impl Magnitude {
    /// Creates a new `Magnitude` from its parts.
    pub fn new(sign: bool, integer: BigUint, half_bit: bool, sticky_bit: bool) -> Self {
        Self {
            sign,
            integer,
            half_bit,
            sticky_bit,
        }
    }

    /// Returns the sign bit.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Returns the truncated integer part of the absolute value.
    pub fn integer(&self) -> &BigUint {
        &self.integer
    }

    /// Consumes this `Magnitude` returning the truncated integer part.
    pub fn into_integer(self) -> BigUint {
        self.integer
    }

    /// Returns true if the fractional part is at least one half.
    pub fn half_bit(&self) -> bool {
        self.half_bit
    }

    /// Returns true if the fractional part is neither zero nor exactly one half.
    pub fn sticky_bit(&self) -> bool {
        self.sticky_bit
    }

    /// Returns true if the number is an integer.
    pub fn is_exact(&self) -> bool {
        !self.half_bit && !self.sticky_bit
    }

    /// Returns true if the number lies exactly halfway between two integers.
    pub fn is_tie(&self) -> bool {
        self.half_bit && !self.sticky_bit
    }
}
