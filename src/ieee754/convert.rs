/*
    Unpacking of `f64` and `f32` encodings
*/

use bitvec::field::BitField;

use super::*;

// Minimal floating-point encoding grouped by classification
pub(crate) enum FloatNum {
    // signed zero or finite number
    // => (sign, exponent, significand) for `(-1)^s * c * 2^exp`
    Number(bool, i64, BitVec),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign)
    Nan(bool),
}

/// An IEEE-754 binary interchange format.
///
/// The generics `E` and `N` specify the number of bits in the
/// exponent field and in the entire encoding overall.
#[derive(Debug)]
pub struct Format<const E: usize, const N: usize>;

// Format parameters
impl<const E: usize, const N: usize> Format<E, N> {
    /// Number of (binary) digits when the significand is expressed
    /// as an integer. This is just `Self::M + 1`.
    pub const PREC: usize = N - E;

    /// Bitwidth of the mantissa field.
    pub const M: usize = Self::PREC - 1;

    /// Exponent of the largest finite value in the form `(-1)^s 2^e m`
    /// where `m` is a fraction between 1 and 2.
    pub const EMAX: i64 = i64::pow(2, (E - 1) as u32) - 1;

    /// Exponent of the smallest normal value in the form `(-1)^s 2^e m`.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// The exponent field bias.
    pub const BIAS: i64 = Self::EMAX;
}

// Packed float utilities
impl<const E: usize, const N: usize> Format<E, N> {
    // Loads the low `N` bits of `bits` as a packed encoding.
    fn packed(bits: u64) -> BitVec {
        let mut bv = bitvec![0; N];
        bv.store_le(bits);
        bv
    }

    // Returns the sign field from a packed floating-point representation.
    #[inline]
    fn packed_sign(bv: &BitSlice) -> bool {
        bv[N - 1]
    }

    // Returns the exponent field from a packed floating-point representation.
    #[inline]
    fn packed_exponent(bv: &BitSlice) -> i64 {
        bv[(N - E - 1)..(N - 1)].load_le::<u64>() as i64
    }

    // Returns the mantissa field from a packed floating-point representation.
    #[inline]
    fn packed_mantissa(bv: &BitSlice) -> BitVec {
        bv[..(N - E - 1)].into()
    }

    /// Returns the sign bit of the encoding `bits`.
    /// NaNs are not special: their sign bit is reported as is.
    pub fn sign(bits: u64) -> bool {
        Self::packed_sign(&Self::packed(bits))
    }

    // Classifies the encoding `bits`.
    pub(crate) fn unpack(bits: u64) -> FloatNum {
        let bv = Self::packed(bits);
        let s = Self::packed_sign(&bv);
        let mut exp = Self::packed_exponent(&bv) - Self::BIAS;
        let mut m = Self::packed_mantissa(&bv);

        // branch on exponent
        if exp > Self::EMAX {
            if m.not_any() {
                FloatNum::Infinity(s)
            } else {
                FloatNum::Nan(s)
            }
        } else if exp < Self::EMIN {
            if m.not_any() {
                // zero
                FloatNum::Number(s, 0, bitvec![0; Self::PREC])
            } else {
                // subnormal
                m.push(false);
                exp = Self::EMIN - Self::M as i64;
                FloatNum::Number(s, exp, m)
            }
        } else {
            // normal
            m.push(true);
            exp -= Self::M as i64;
            FloatNum::Number(s, exp, m)
        }
    }
}
