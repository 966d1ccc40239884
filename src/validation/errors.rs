//! Validation error types

use thiserror::Error;

use super::fields::Field;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field validation failures.
///
/// Shape failures and checksum failures on the same field are distinct
/// conditions: a credit card can be 16 digits yet fail the Luhn sum, and an
/// id card can be well-formed yet carry the wrong check letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value does not match the field's pattern
    #[error("invalid {0} format")]
    Format(Field),

    /// 16-digit card number whose Luhn weighted sum is not divisible by 10
    #[error("invalid credit card number (luhn checksum failed)")]
    LuhnCheckFailed,

    /// Well-formed id card whose trailing letter does not match the table
    #[error("invalid id card letter")]
    IdLetterMismatch,

    /// Number of nights is not a parseable integer
    #[error("invalid num_days datatype")]
    NumDaysNotAnInteger,

    /// Number of nights is outside the accepted range
    #[error("num_days should be in the range 1-10")]
    NumDaysOutOfRange,
}
