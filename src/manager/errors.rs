//! Lifecycle error types
//!
//! Every failure aborts the running operation at the point of violation; no
//! store is written once any check has failed, and nothing is retried.

use thiserror::Error;

use crate::integrity::LocalizerMismatch;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for lifecycle operations
pub type ManagerResult<T> = Result<T, ManagerError>;

/// Failures surfaced by the three lifecycle operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// A field failed its pattern or checksum rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A reservation with the same localizer already exists
    #[error("reservation already exists")]
    ReservationExists,

    /// The id card already holds a reservation
    #[error("this id card has another reservation")]
    IdCardHasReservation,

    /// No reservation with the supplied localizer
    #[error("localizer not found")]
    LocalizerNotFound,

    /// The localizer belongs to a different id card
    #[error("localizer is not correct for this id card")]
    WrongIdCardForLocalizer,

    /// The stored reservation no longer derives its stored localizer
    #[error("reservation has been manipulated")]
    ReservationManipulated(#[from] LocalizerMismatch),

    /// Today is not the reservation's arrival date
    #[error("today is not the reservation date")]
    NotArrivalDate,

    /// A stay with this room key was already opened
    #[error("check-in already performed")]
    AlreadyCheckedIn,

    /// No stay with the supplied room key
    #[error("room key not found")]
    RoomKeyNotFound,

    /// Today is not the stay's departure day
    #[error("today is not the departure day")]
    NotDepartureDate,

    /// The guest already checked out of this room
    #[error("guest is already out")]
    AlreadyCheckedOut,

    /// Store-level failure: corruption, missing store file, io
    #[error(transparent)]
    Store(#[from] StoreError),
}
