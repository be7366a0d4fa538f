/*
    Top-level
*/

mod error;
mod number;
mod ops;
mod round;
mod sign;

pub mod decimal;
pub mod ieee754;
pub use error::*;
pub use number::*;
pub use ops::*;
pub use round::*;
pub use sign::*;
