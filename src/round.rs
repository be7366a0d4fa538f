/*
    Rounding
*/

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_integer::Integer;
use num_traits::Zero;
use tracing::debug;

use crate::{Magnitude, Number, RoundingError, RoundingResult};

/// Rounding modes for rounding a real number to an integer.
///
/// Directed modes (`Down`, `Up`, `ToZero`, `FromZero`) pick a neighbor
/// by direction alone. The `Half*` modes round to the nearest integer
/// and only differ when the number lies exactly halfway between two
/// integers. `Round05FromZero` is the decimal "round for reround" rule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round toward -infinity (floor).
    Down,
    /// Round toward +infinity (ceiling).
    Up,
    /// Round toward zero (truncation).
    ToZero,
    /// Round away from zero.
    FromZero,
    /// Round to nearest, ties to the even neighbor.
    #[default]
    HalfEven,
    /// Round to nearest, ties to the odd neighbor.
    HalfOdd,
    /// Round to nearest, ties toward -infinity.
    HalfDown,
    /// Round to nearest, ties toward +infinity.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfToZero,
    /// Round to nearest, ties away from zero.
    HalfFromZero,
    /// Round toward zero, unless the result would end in 0 or 5,
    /// in which case round away from zero.
    Round05FromZero,
}

/// Directions a rounding mode may resolve to once the sign is known.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    /// Toward zero.
    ToZero,
    /// Away from zero.
    AwayZero,
    /// Toward the neighbor that is even.
    ToEven,
    /// Toward the neighbor that is odd.
    ToOdd,
    /// Toward zero unless the truncated result ends in 0 or 5
    /// (rounding to prepare for shorter precision).
    ShorterPrecision,
}

impl RoundingMode {
    /// Every rounding mode.
    pub const ALL: [RoundingMode; 11] = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::ToZero,
        RoundingMode::FromZero,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
        RoundingMode::HalfDown,
        RoundingMode::HalfUp,
        RoundingMode::HalfToZero,
        RoundingMode::HalfFromZero,
        RoundingMode::Round05FromZero,
    ];

    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::HalfEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::HalfOdd, _) => (true, RoundingDirection::ToOdd),
            (RoundingMode::HalfToZero, _) => (true, RoundingDirection::ToZero),
            (RoundingMode::HalfFromZero, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::HalfUp, false) => (true, RoundingDirection::AwayZero),
            (RoundingMode::HalfUp, true) => (true, RoundingDirection::ToZero),
            (RoundingMode::HalfDown, false) => (true, RoundingDirection::ToZero),
            (RoundingMode::HalfDown, true) => (true, RoundingDirection::AwayZero),
            (RoundingMode::Up, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::Up, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::Down, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::Down, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
            (RoundingMode::FromZero, _) => (false, RoundingDirection::AwayZero),
            (RoundingMode::Round05FromZero, _) => (false, RoundingDirection::ShorterPrecision),
        }
    }

    /// Returns a human-readable description of this rounding mode.
    pub const fn description(&self) -> &'static str {
        match self {
            RoundingMode::Down => "round toward -infinity",
            RoundingMode::Up => "round toward +infinity",
            RoundingMode::ToZero => "round toward zero",
            RoundingMode::FromZero => "round away from zero",
            RoundingMode::HalfEven => "round to nearest, ties to the even neighbor",
            RoundingMode::HalfOdd => "round to nearest, ties to the odd neighbor",
            RoundingMode::HalfDown => "round to nearest, ties toward -infinity",
            RoundingMode::HalfUp => "round to nearest, ties toward +infinity",
            RoundingMode::HalfToZero => "round to nearest, ties toward zero",
            RoundingMode::HalfFromZero => "round to nearest, ties away from zero",
            RoundingMode::Round05FromZero => {
                "round toward zero, unless the result would end in 0 or 5, \
                 in which case round away from zero"
            }
        }
    }
}

/// Rounding behavior shared by a sequence of operations.
///
/// For now this is only the rounding mode used when none is given
/// explicitly, `RoundingMode::HalfEven` unless configured otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundingContext {
    rm: RoundingMode,
}

impl RoundingContext {
    /// Creates a new rounding context
    /// with `rm` set to `RoundingMode::HalfEven`.
    pub fn new() -> Self {
        Self {
            rm: RoundingMode::HalfEven,
        }
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Returns the rounding mode.
    pub fn mode(&self) -> RoundingMode {
        self.rm
    }
}

impl Default for RoundingContext {
    fn default() -> Self {
        Self::new()
    }
}

// Returns true if the rounding information implies the integer part
// should be incremented by 1, that is, rounded away from zero.
fn round_requires_increment(
    sign: bool,
    integer: &BigUint,
    half_bit: bool,
    sticky_bit: bool,
    rm: RoundingMode,
) -> bool {
    match rm.direction(sign) {
        (true, RoundingDirection::ToEven) => {
            // no half bit => truncate
            // half bit and sticky bit => increment
            // tie => increment if odd since we want it to be even
            half_bit && (sticky_bit || integer.is_odd())
        }
        (true, RoundingDirection::ToOdd) => {
            // tie => increment if even
            half_bit && (sticky_bit || integer.is_even())
        }
        (true, RoundingDirection::AwayZero) => {
            // half bit => increment (tie requires increment)
            half_bit
        }
        (true, RoundingDirection::ToZero) => {
            // tie => truncate
            half_bit && sticky_bit
        }
        (true, RoundingDirection::ShorterPrecision) => {
            // (unused)
            // tie => increment if the last digit is 0 or 5
            half_bit && (sticky_bit || (integer % 5u32).is_zero())
        }
        (false, RoundingDirection::AwayZero) => {
            // increment if not exact
            half_bit || sticky_bit
        }
        (false, RoundingDirection::ToZero) => {
            // always truncate
            false
        }
        (false, RoundingDirection::ToEven) => {
            // (unused)
            // result needs to be even
            (half_bit || sticky_bit) && integer.is_odd()
        }
        (false, RoundingDirection::ToOdd) => {
            // (unused)
            // result needs to be odd
            (half_bit || sticky_bit) && integer.is_even()
        }
        (false, RoundingDirection::ShorterPrecision) => {
            // last digit of the truncated result needs to be neither 0 nor 5
            (half_bit || sticky_bit) && (integer % 5u32).is_zero()
        }
    }
}

/// Rounds a finite number, given as a `Magnitude`, to an integer
/// using the rounding mode `rm`. Returns the sign bit of the input
/// and the absolute value of the result.
pub fn round_magnitude(m: Magnitude, rm: RoundingMode) -> (bool, BigUint) {
    let increment =
        round_requires_increment(m.sign(), m.integer(), m.half_bit(), m.sticky_bit(), rm);
    let sign = m.sign();
    let mut i = m.into_integer();
    if increment {
        i += 1u32;
    }
    (sign, i)
}

/// Rounds `x` to an integer using the rounding mode `rm`.
///
/// Integers cannot represent infinities or NaNs, so an infinite `x`
/// raises `RoundingError::Overflow` and a NaN raises
/// `RoundingError::InvalidValue`. Integers also carry no signed zero:
/// any zero result is the plain integer 0.
pub fn round_to_integer<N: Number>(x: &N, rm: RoundingMode) -> RoundingResult<BigInt> {
    match x.magnitude() {
        Some(m) => {
            let (s, i) = round_magnitude(m, rm);
            let sign = if s { BigSign::Minus } else { BigSign::Plus };
            Ok(BigInt::from_biguint(sign, i))
        }
        None if x.is_nan() => {
            debug!(?rm, "cannot round NaN to an integer");
            Err(RoundingError::InvalidValue)
        }
        None => {
            debug!(?rm, sign = x.sign(), "cannot round infinity to an integer");
            Err(RoundingError::Overflow)
        }
    }
}
