//! Lifecycle orchestration
//!
//! `HotelManager` drives the three stage transitions over the reservation,
//! stay and checkout stores:
//!
//! ```text
//! Requested -> Reserved -> CheckedIn -> CheckedOut
//! ```
//!
//! Forward only; there is no cancellation path and no backward transition.
//! Each operation validates fully in memory before its store is rewritten.

mod clock;
mod errors;

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use errors::{ManagerError, ManagerResult};

use chrono::NaiveDate;

use crate::config::StoreConfig;
use crate::integrity;
use crate::model::{CheckoutRecord, Reservation, RoomType, Stay};
use crate::store::{JsonStore, StoreError};
use crate::validation::{self, Field, ValidationError};

/// Input fields for a new reservation. All values arrive as text and are
/// validated before anything is derived or persisted.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub id_card: String,
    pub credit_card: String,
    pub name_surname: String,
    pub phone_number: String,
    pub room_type: String,
    /// Arrival date, `dd/mm/yyyy`
    pub arrival_date: String,
    /// Number of nights as supplied, checked as a parseable integer in [1,10]
    pub num_days: String,
}

/// Orchestrates the three stage transitions.
pub struct HotelManager<C: TimeSource = SystemClock> {
    reservations: JsonStore,
    stays: JsonStore,
    checkouts: JsonStore,
    clock: C,
}

impl HotelManager<SystemClock> {
    /// Manager over the stores in `config`, on the system clock.
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: TimeSource> HotelManager<C> {
    /// Manager over the stores in `config`, reading time from `clock`.
    pub fn with_clock(config: &StoreConfig, clock: C) -> Self {
        Self {
            reservations: JsonStore::new("reservations", config.reservations_path()),
            stays: JsonStore::new("stays", config.stays_path()),
            checkouts: JsonStore::new("checkouts", config.checkouts_path()),
            clock,
        }
    }

    /// Creates a reservation and returns its localizer.
    ///
    /// The localizer and the id card are both uniqueness keys over the whole
    /// reservation store; either conflict rejects the request before any
    /// write.
    pub fn reserve(&self, request: &ReservationRequest) -> ManagerResult<String> {
        validation::validate_id_card(&request.id_card)?;
        let room_type: RoomType = request.room_type.parse()?;
        validation::validate(Field::NameSurname, &request.name_surname)?;
        validation::validate_credit_card(&request.credit_card)?;
        validation::validate(Field::ArrivalDate, &request.arrival_date)?;
        let num_days = validation::validate_num_days(&request.num_days)?;
        validation::validate(Field::PhoneNumber, &request.phone_number)?;

        let reservation = Reservation::new(
            &request.id_card,
            &request.credit_card,
            &request.name_surname,
            &request.phone_number,
            room_type,
            &request.arrival_date,
            num_days,
            self.clock.now().timestamp(),
        );

        let record = self.reservations.encode(&reservation)?;
        match self
            .reservations
            .append_unique(record, &["localizer", "id_card"])
        {
            Ok(()) => Ok(reservation.localizer),
            Err(StoreError::Duplicate { key }) if key == "localizer" => {
                Err(ManagerError::ReservationExists)
            }
            Err(StoreError::Duplicate { .. }) => Err(ManagerError::IdCardHasReservation),
            Err(other) => Err(other.into()),
        }
    }

    /// Checks a guest in against an existing reservation; returns the room
    /// key of the opened stay.
    pub fn guest_arrival(&self, localizer: &str, id_card: &str) -> ManagerResult<String> {
        validation::validate_id_card(id_card)?;
        validation::validate(Field::Localizer, localizer)?;

        let found = match self.reservations.find_by("localizer", localizer) {
            Err(StoreError::NotFound { .. }) => return Err(ManagerError::LocalizerNotFound),
            other => other?,
        };
        let reservation: Reservation = self.reservations.decode(found)?;

        if reservation.id_card != id_card {
            return Err(ManagerError::WrongIdCardForLocalizer);
        }

        // re-derive under the stored creation instant, never the current one
        integrity::verify_reservation(&reservation)?;

        let arrival_day = parse_arrival_date(&reservation.arrival_date)?;
        if arrival_day != self.clock.today() {
            return Err(ManagerError::NotArrivalDate);
        }

        let stay = Stay::open(&reservation, arrival_day);
        let record = self.stays.encode(&stay)?;
        match self.stays.append_unique(record, &["room_key"]) {
            Ok(()) => Ok(stay.room_key),
            Err(StoreError::Duplicate { .. }) => Err(ManagerError::AlreadyCheckedIn),
            Err(other) => Err(other.into()),
        }
    }

    /// Closes a stay on its departure day.
    pub fn guest_checkout(&self, room_key: &str) -> ManagerResult<()> {
        validation::validate(Field::RoomKey, room_key)?;

        let found = match self.stays.find_by("room_key", room_key) {
            Err(StoreError::NotFound { .. }) => return Err(ManagerError::RoomKeyNotFound),
            other => other?,
        };
        let stay: Stay = self.stays.decode(found)?;

        // an out-of-range departure timestamp can never equal today
        let departure = stay
            .departure_date()
            .ok_or(ManagerError::NotDepartureDate)?;
        if departure != self.clock.today() {
            return Err(ManagerError::NotDepartureDate);
        }

        let checkout = CheckoutRecord::new(room_key, self.clock.now().timestamp());
        let record = self.checkouts.encode(&checkout)?;
        match self.checkouts.append_unique(record, &["room_key"]) {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate { .. }) => Err(ManagerError::AlreadyCheckedOut),
            Err(other) => Err(other.into()),
        }
    }
}

/// Parses a stored `dd/mm/yyyy` arrival date into a calendar day.
fn parse_arrival_date(text: &str) -> ManagerResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d/%m/%Y")
        .map_err(|_| ValidationError::Format(Field::ArrivalDate).into())
}
