/*
    Operations
*/

use num_bigint::BigInt;
use tracing::trace;

use crate::{round_magnitude, Number, RoundingContext, RoundingMode, RoundingResult};

/// Rounds `x` to an integral value of the same representation
/// using the rounding mode `rm`.
///
/// This never fails. Zeros and infinities are returned unchanged,
/// NaNs are propagated with their sign bit, and so are numbers that
/// are already integers. Otherwise the integer core decides the
/// result; a zero result keeps the sign of `x`, so rounding `-0.25`
/// toward zero gives `-0`.
pub fn round_number<N: Number>(x: &N, rm: RoundingMode) -> N {
    if x.is_zero() || x.is_infinity() {
        trace!(?rm, sign = x.sign(), "passing through zero or infinity");
        return x.clone();
    }

    if x.is_nan() {
        trace!(?rm, sign = x.sign(), "propagating NaN");
        return x.quiet();
    }

    match x.magnitude() {
        Some(m) if m.is_exact() => x.clone(),
        Some(m) => {
            let (s, i) = round_magnitude(m, rm);
            N::from_magnitude(s, &i)
        }
        // finite but too wide to expand, so already an integer
        None => x.clone(),
    }
}

/// Returns true if `x` is finite and has no fractional part.
pub fn is_integral<N: Number>(x: &N) -> bool {
    x.is_integral()
}

/// Rounding operations driven by a [`RoundingContext`].
///
/// Implemented once for every `Number`.
pub trait Round: Number {
    /// Rounds to an integral value of the same representation
    /// using the rounding mode of `ctx`.
    fn round_integral(&self, ctx: &RoundingContext) -> Self {
        round_number(self, ctx.mode())
    }

    /// Rounds to an integer using the rounding mode of `ctx`.
    fn round_to_integer(&self, ctx: &RoundingContext) -> RoundingResult<BigInt> {
        crate::round_to_integer(self, ctx.mode())
    }
}

impl<N: Number> Round for N {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use num_bigint::BigUint;

    use super::*;
    use crate::Magnitude;

    // An `f64` that counts how often it is decomposed
    #[derive(Clone, Debug)]
    struct Counted(f64, Rc<Cell<usize>>);

    impl Number for Counted {
        fn is_zero(&self) -> bool {
            self.0.is_zero()
        }

        fn is_infinity(&self) -> bool {
            self.0.is_infinity()
        }

        fn is_nan(&self) -> bool {
            Number::is_nan(&self.0)
        }

        fn sign(&self) -> bool {
            Number::sign(&self.0)
        }

        fn magnitude(&self) -> Option<Magnitude> {
            self.1.set(self.1.get() + 1);
            self.0.magnitude()
        }

        fn from_magnitude(sign: bool, integer: &BigUint) -> Self {
            Counted(f64::from_magnitude(sign, integer), Rc::default())
        }
    }

    fn decompositions(x: f64) -> (f64, usize) {
        let count = Rc::new(Cell::new(0));
        let r = round_number(&Counted(x, count.clone()), RoundingMode::HalfEven);
        (r.0, count.get())
    }

    #[test]
    fn decomposes_once() {
        assert_eq!(decompositions(2.5), (2.0, 1));
        assert_eq!(decompositions(-7.0), (-7.0, 1));
        assert_eq!(decompositions(0.0), (0.0, 0));
        assert_eq!(decompositions(f64::INFINITY), (f64::INFINITY, 0));
    }
}
