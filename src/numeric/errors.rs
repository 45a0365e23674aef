// ============================================================================
// Money Errors
// Error types for fixed-precision monetary arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during monetary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoneyError {
    /// Operand is not a well-formed (or representable) base-10 decimal string
    InvalidAmount,
    /// Divisor or modulus operand rounds to zero at the current precision
    DivisionByZero,
    /// Result exceeded the representable i128 range
    Overflow,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidAmount => {
                write!(f, "invalid monetary amount: could not parse value")
            },
            MoneyError::DivisionByZero => write!(
                f,
                "division by zero: divisor rounds to zero at the current precision"
            ),
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the representable range")
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
