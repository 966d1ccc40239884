//! Recompute-and-compare reservation verification
//!
//! Rebuilds a stored reservation's localizer under its original creation
//! instant (`reserved_at`, never the current time) and compares it
//! byte-for-byte with the stored identifier. A mismatch means some field of
//! the persisted record differs from what produced the original identifier,
//! i.e. the record was edited after creation.

use thiserror::Error;

use crate::model::Reservation;

/// Stored and recomputed localizer of a record that no longer match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("localizer mismatch: stored {stored}, recomputed {recomputed}")]
pub struct LocalizerMismatch {
    /// The identifier persisted with the record
    pub stored: String,
    /// The identifier the record's content derives today
    pub recomputed: String,
}

/// Checks that `reservation`'s stored localizer still matches its content.
pub fn verify_reservation(reservation: &Reservation) -> Result<(), LocalizerMismatch> {
    let recomputed = reservation.compute_localizer();
    if recomputed != reservation.localizer {
        return Err(LocalizerMismatch {
            stored: reservation.localizer.clone(),
            recomputed,
        });
    }
    Ok(())
}
