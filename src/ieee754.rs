/*
    Binary floating-point numbers as specified by the IEEE-754 standard
*/

use bitvec::prelude::Lsb0;

use crate::{round_number, Number, RoundingMode};

type BitVec = bitvec::vec::BitVec<u64, Lsb0>;
type BitSlice = bitvec::slice::BitSlice<u64, Lsb0>;

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u64, Lsb0; $($t)*]
        }
    };
}

mod convert;
mod number;
mod util;

pub use convert::Format;

/// A native binary floating-point type: `f64` or `f32`.
pub trait IEEEFloat: Number + Copy {}

impl IEEEFloat for f64 {}
impl IEEEFloat for f32 {}

/// Rounds the binary float `x` to an integral value
/// using the rounding mode `rm`.
///
/// Signed zeros, infinities and NaNs (payload included) are returned
/// unchanged. A zero result keeps the sign of `x`, so
/// `round_float(-0.25, RoundingMode::HalfEven)` is `-0.0`.
pub fn round_float<F: IEEEFloat>(x: F, rm: RoundingMode) -> F {
    round_number(&x, rm)
}
