//! Stay (check-in) records and room key derivation

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::integrity::sha256_hex;

use super::reservation::{Reservation, RoomType};

/// Seconds per night of stay.
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A guest's stay as persisted in the check-in store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    /// Content-derived identifier, 64 hex digits
    pub room_key: String,
    pub id_card: String,
    /// Localizer of the reservation this stay was opened from
    pub localizer: String,
    pub num_days: u32,
    pub room_type: RoomType,
    /// Arrival day at 00:00 UTC, Unix seconds
    pub arrival: i64,
    /// `arrival` plus one day per night, Unix seconds
    pub departure: i64,
}

impl Stay {
    /// Opens a stay for a verified reservation arriving on `arrival_day`.
    ///
    /// Timestamps are day-resolution, which makes the room key a pure
    /// function of the reservation: repeating a check-in derives the
    /// identical key and trips the store's uniqueness check.
    pub fn open(reservation: &Reservation, arrival_day: NaiveDate) -> Self {
        let arrival = arrival_day.and_time(NaiveTime::MIN).and_utc().timestamp();
        let departure = arrival + i64::from(reservation.num_days) * SECONDS_PER_DAY;
        let mut stay = Self {
            room_key: String::new(),
            id_card: reservation.id_card.clone(),
            localizer: reservation.localizer.clone(),
            num_days: reservation.num_days,
            room_type: reservation.room_type,
            arrival,
            departure,
        };
        stay.room_key = stay.compute_room_key();
        stay
    }

    /// Room key derivation: SHA-256 hex over the stay signature payload.
    pub fn compute_room_key(&self) -> String {
        sha256_hex(&format!(
            r#"{{"typ":"stay","localizer":"{}","arrival":{},"departure":{}}}"#,
            self.localizer, self.arrival, self.departure,
        ))
    }

    /// Calendar day (UTC) the guest is due to leave, if the stored
    /// timestamp denotes a representable instant.
    pub fn departure_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.departure, 0).map(|dt| dt.date_naive())
    }
}
