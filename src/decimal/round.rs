/*
    Rounding
*/

use super::*;
use crate::{round_number, RoundingMode, Sign};

/// Rounds the decimal `x` to an integral value using the rounding mode `rm`.
///
/// This never fails. Signed zeros, infinities and numbers that are
/// already integers are returned unchanged, a quiet NaN is propagated
/// as is and a signaling NaN becomes the quiet NaN with the same sign
/// and payload. Any other result has exponent 0 and, when zero, the
/// sign of `x`.
pub fn round_decimal(x: &Decimal, rm: RoundingMode) -> Decimal {
    if has_no_fraction_digits(x) {
        return x.clone();
    }

    match rm {
        RoundingMode::HalfUp => round_half_updown(x, Sign::Pos),
        RoundingMode::HalfDown => round_half_updown(x, Sign::Neg),
        _ => round_number(x, rm),
    }
}

/// Rounds the decimal `x` to the nearest integral value, breaking ties
/// toward `+infinity` when `direction` is `Sign::Pos` (half-up) and
/// toward `-infinity` when it is `Sign::Neg` (half-down).
///
/// Zeros, infinities and NaNs are handled as in [`round_decimal`].
pub fn round_half_updown(x: &Decimal, direction: Sign) -> Decimal {
    if has_no_fraction_digits(x) {
        return x.clone();
    }

    // a tie goes away from zero exactly when
    // `x` already points in `direction`
    let rm = match Sign::of(x) * direction {
        Sign::Pos => RoundingMode::HalfFromZero,
        Sign::Neg => RoundingMode::HalfToZero,
    };
    round_number(x, rm)
}

// A finite decimal with a non-negative exponent is an integer
// and needs no expansion of its coefficient.
fn has_no_fraction_digits(x: &Decimal) -> bool {
    x.exponent().is_some_and(|exp| exp >= 0)
}
