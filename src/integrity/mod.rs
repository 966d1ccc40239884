//! Content-derived identifiers and tamper detection
//!
//! A reservation's localizer and a stay's room key are pure functions of the
//! owning record's content (the localizer additionally folds in the creation
//! instant). Recomputing the derivation over a stored record and comparing
//! the result with the stored identifier is the system's only tamper check.
//! It is a checksum, not a signature: it detects accidental corruption and
//! naive edits, not an adversary who knows the derivation.

mod digest;
mod verifier;

pub use digest::{md5_hex, sha256_hex};
pub use verifier::{verify_reservation, LocalizerMismatch};
