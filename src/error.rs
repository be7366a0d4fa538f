/*
    Errors
*/

use thiserror::Error;

/// Errors raised by the integer-returning rounding primitives
/// and by sign determination.
///
/// The float and decimal adapters never produce these: they handle
/// zeros, infinities, and NaNs before the integer core is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum RoundingError {
    /// The operand is not a real number (e.g. complex).
    #[error("invalid operand: sign is only defined for real numbers")]
    InvalidOperand,
    /// An infinity cannot be converted to an integer.
    #[error("overflow: cannot convert infinity to integer")]
    Overflow,
    /// A NaN cannot be converted to an integer.
    #[error("invalid value: cannot convert NaN to integer")]
    InvalidValue,
}

/// Result type alias for rounding operations.
pub type RoundingResult<T> = Result<T, RoundingError>;
