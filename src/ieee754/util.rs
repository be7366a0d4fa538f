use num_bigint::BigUint;
use std::ops::ShlAssign;

use super::*;
use crate::Magnitude;

// Converts a `BitSlice` to `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitSlice) -> BigUint {
    let mut i = BigUint::default();
    for b in bv.iter().rev() {
        i.shl_assign(1);
        i.set_bit(0, *b);
    }
    i
}

// Splits `(-1)^s * c * 2^exp` at the binary point:
//  - the integer part is the bits of `c` above the point
//  - the half bit is the first bit below the point
//  - the sticky bit is the OR of the remaining bits below the point
pub(crate) fn split_at_binary_point(s: bool, exp: i64, mut c: BitVec) -> Magnitude {
    if exp >= 0 {
        // already an integer
        let i = bitvec_to_biguint(&c) << exp.unsigned_abs();
        Magnitude::new(s, i, false, false)
    } else {
        // pad with leading zeros so that the split
        // always has the full fraction as the low part
        let diff = exp.unsigned_abs() as usize;
        if c.len() < diff {
            c.resize(diff, false);
        }

        let (low, high) = c.split_at(diff);
        let half_bit = low[diff - 1];
        let sticky_bit = low[..diff - 1].any();
        Magnitude::new(s, bitvec_to_biguint(high), half_bit, sticky_bit)
    }
}
