/*
    Implementing `Number` for `f64` and `f32`
*/

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::convert::FloatNum;
use super::util::split_at_binary_point;
use super::*;
use crate::Magnitude;

macro_rules! impl_number {
    ($t:ty, $to_float:ident, $E:literal, $N:literal) => {
        impl Number for $t {
            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            fn is_infinity(&self) -> bool {
                <$t>::is_infinite(*self)
            }

            fn is_nan(&self) -> bool {
                <$t>::is_nan(*self)
            }

            fn sign(&self) -> bool {
                Format::<$E, $N>::sign(u64::from(self.to_bits()))
            }

            fn magnitude(&self) -> Option<Magnitude> {
                match Format::<$E, $N>::unpack(u64::from(self.to_bits())) {
                    FloatNum::Number(s, exp, c) => Some(split_at_binary_point(s, exp, c)),
                    FloatNum::Infinity(_) | FloatNum::Nan(_) => None,
                }
            }

            fn from_magnitude(sign: bool, integer: &BigUint) -> Self {
                // exact whenever `integer` came from rounding a float
                let f = integer.$to_float().unwrap_or(<$t>::INFINITY);
                if sign {
                    -f
                } else {
                    f
                }
            }
        }
    };
}

impl_number!(f64, to_f64, 11, 64);
impl_number!(f32, to_f32, 8, 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude() {
        let m = 2.5f64.magnitude().unwrap();
        assert_eq!(m.integer(), &BigUint::from(2u32));
        assert!(m.is_tie());

        let m = (-0.1f32).magnitude().unwrap();
        assert!(m.sign());
        assert_eq!(m.integer(), &BigUint::default());
        assert!(!m.half_bit() && m.sticky_bit());

        let m = 1e300f64.magnitude().unwrap();
        assert!(m.is_exact());

        assert!(f64::INFINITY.magnitude().is_none());
        assert!(f32::NAN.magnitude().is_none());
    }

    #[test]
    fn signed_zero_result() {
        let z = f64::from_magnitude(true, &BigUint::default());
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
    }
}
