//! Checksum rules for numeric identifiers
//!
//! Two pure checks with no persisted state: the Luhn algorithm over 16-digit
//! card numbers and the mod-23 check-letter scheme over national id numbers.

use super::errors::{ValidationError, ValidationResult};
use super::fields::{self, Field};

/// Mod-23 check letter table: index `digits % 23` selects the expected
/// trailing letter.
pub const ID_LETTER_TABLE: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z',
    'S', 'Q', 'V', 'H', 'L', 'C', 'K', 'E',
];

/// Validates a credit card number: 16 digits whose Luhn weighted sum is
/// divisible by 10.
///
/// A shape mismatch and a failed checksum are distinct conditions.
pub fn validate_credit_card(number: &str) -> ValidationResult<&str> {
    fields::validate(Field::CreditCard, number)?;
    if luhn_sum(number) % 10 != 0 {
        return Err(ValidationError::LuhnCheckFailed);
    }
    Ok(number)
}

/// Luhn weighted digit sum: every second digit counting from the rightmost
/// is doubled, and the digits of any doubled value above 9 are summed
/// (equivalently, 9 is subtracted).
fn luhn_sum(digits: &str) -> u32 {
    digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Validates a national id: 8 digits plus the check letter selected by the
/// numeric part mod 23.
pub fn validate_id_card(id: &str) -> ValidationResult<&str> {
    fields::validate(Field::IdCard, id)?;
    let digits: u32 = id[..8]
        .parse()
        .map_err(|_| ValidationError::Format(Field::IdCard))?;
    let expected = ID_LETTER_TABLE[(digits % 23) as usize];
    // the value is plain ASCII once the shape check has passed
    if id.as_bytes()[8] as char != expected {
        return Err(ValidationError::IdLetterMismatch);
    }
    Ok(id)
}
