/*
    Implementing `Number` for `Decimal`
*/

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::*;
use crate::{Magnitude, Number};

// Upper bound on the number of decimal digits of `c`:
// `floor(bits * log10(2)) + 1`, with `log10(2)` rounded up.
fn max_digits(c: &BigUint) -> u64 {
    c.bits() * 30103 / 100000 + 1
}

// Returns `10^n`, or `None` if `c` surely has fewer than `n` digits
// (in which case `c * 10^-n` is below 1/10).
fn divisor_for(c: &BigUint, n: u64) -> Option<BigUint> {
    if n > max_digits(c) {
        None
    } else {
        let n = u32::try_from(n).ok()?;
        Some(BigUint::from(10u32).pow(n))
    }
}

impl Number for Decimal {
    fn is_zero(&self) -> bool {
        matches!(&self.num, DecimalNum::Number(_, _, c) if c.is_zero())
    }

    fn is_infinity(&self) -> bool {
        matches!(self.num, DecimalNum::Infinity(_))
    }

    fn is_nan(&self) -> bool {
        matches!(self.num, DecimalNum::Nan(_, _, _))
    }

    fn sign(&self) -> bool {
        Decimal::sign(self)
    }

    fn magnitude(&self) -> Option<Magnitude> {
        let (s, exp, c) = match &self.num {
            DecimalNum::Number(s, exp, c) => (*s, *exp, c),
            _ => return None,
        };

        if exp >= 0 {
            // already an integer
            // (exponents past `u32::MAX` cannot be expanded)
            let i = c * BigUint::from(10u32).pow(u32::try_from(exp).ok()?);
            return Some(Magnitude::new(s, i, false, false));
        }

        match divisor_for(c, exp.unsigned_abs()) {
            None => {
                // strictly less than 1/10
                Some(Magnitude::new(s, BigUint::zero(), false, !c.is_zero()))
            }
            Some(d) => {
                // compare twice the remainder with the divisor
                // to recover the half and sticky bits
                let (q, r) = c.div_rem(&d);
                let (half_bit, sticky_bit) = match (&r << 1u32).cmp(&d) {
                    Ordering::Less => (false, !r.is_zero()),
                    Ordering::Equal => (true, false),
                    Ordering::Greater => (true, true),
                };
                Some(Magnitude::new(s, q, half_bit, sticky_bit))
            }
        }
    }

    fn is_integral(&self) -> bool {
        match &self.num {
            DecimalNum::Number(_, exp, c) if *exp < 0 => match divisor_for(c, exp.unsigned_abs()) {
                None => c.is_zero(),
                Some(d) => (c % d).is_zero(),
            },
            DecimalNum::Number(_, _, _) => true,
            _ => false,
        }
    }

    fn from_magnitude(sign: bool, integer: &BigUint) -> Self {
        Decimal::new(sign, integer.clone(), 0)
    }

    fn quiet(&self) -> Self {
        match &self.num {
            DecimalNum::Nan(s, _, payload) => Decimal::nan(*s, false, payload.clone()),
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude() {
        // 2.5
        let m = Decimal::new(false, 25u32, -1).magnitude().unwrap();
        assert_eq!(m.integer(), &BigUint::from(2u32));
        assert!(m.is_tie());

        // -7.4999
        let m = Decimal::new(true, 74999u32, -4).magnitude().unwrap();
        assert!(m.sign());
        assert_eq!(m.integer(), &BigUint::from(7u32));
        assert!(!m.half_bit() && m.sticky_bit());

        // 0.0500, fewer coefficient digits than fraction digits
        let m = Decimal::new(false, 500u32, -4).magnitude().unwrap();
        assert_eq!(m.integer(), &BigUint::zero());
        assert!(!m.half_bit() && m.sticky_bit());

        // 0.5
        let m = Decimal::new(false, 5u32, -1).magnitude().unwrap();
        assert!(m.is_tie());

        // 3 * 10^-40
        let m = Decimal::new(false, 3u32, -40).magnitude().unwrap();
        assert!(!m.half_bit() && m.sticky_bit());

        // 12 * 10^3
        let m = Decimal::new(false, 12u32, 3).magnitude().unwrap();
        assert_eq!(m.integer(), &BigUint::from(12000u32));
        assert!(m.is_exact());

        assert!(Decimal::infinity(false).magnitude().is_none());
        assert!(Decimal::nan(true, false, 0u32).magnitude().is_none());
    }

    #[test]
    fn digit_bound() {
        for (c, digits) in [(0u32, 1), (9, 1), (10, 2), (999, 3), (1000, 4), (1 << 20, 7)] {
            assert!(max_digits(&BigUint::from(c)) >= digits, "{}", c);
        }
        assert!(divisor_for(&BigUint::from(7u32), 1_000_000_000_000).is_none());
        assert_eq!(divisor_for(&BigUint::from(999u32), 3), Some(BigUint::from(1000u32)));

        // the bound may overshoot by one digit: 0.0999
        let m = Decimal::new(false, 999u32, -4).magnitude().unwrap();
        assert_eq!(m.integer(), &BigUint::zero());
        assert!(!m.half_bit() && m.sticky_bit());
    }

    #[test]
    fn integral() {
        assert!(Decimal::new(false, 2500u32, -2).is_integral());
        assert!(!Decimal::new(false, 2501u32, -2).is_integral());
        assert!(Decimal::new(true, 0u32, -9).is_integral());
        assert!(Decimal::new(false, 7u32, 1_000_000_000_000).is_integral());
        assert!(!Decimal::new(false, 7u32, -1_000_000_000_000).is_integral());
        assert!(!Decimal::infinity(false).is_integral());
    }

    #[test]
    fn quiet() {
        let snan = Decimal::nan(true, true, 3u32);
        assert_eq!(snan.quiet(), Decimal::nan(true, false, 3u32));
        assert_eq!(Decimal::from(4).quiet(), Decimal::from(4));
    }
}
