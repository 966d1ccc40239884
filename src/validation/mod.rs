//! Input validation for the reservation lifecycle
//!
//! Every field is checked against a full-match pattern; the credit card and
//! id card additionally carry checksum rules (Luhn, mod-23 check letter)
//! whose failures are distinct conditions from a plain shape mismatch.
//!
//! Validation is deterministic and happens before anything is derived or
//! persisted.

mod checksum;
mod errors;
mod fields;

pub use checksum::{validate_credit_card, validate_id_card, ID_LETTER_TABLE};
pub use errors::{ValidationError, ValidationResult};
pub use fields::{validate, validate_num_days, Field};
