//! Reservation records and localizer derivation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::integrity::md5_hex;
use crate::validation::{Field, ValidationError};

/// Room category offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "SINGLE")]
    Single,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "SUITE")]
    Suite,
}

impl RoomType {
    /// Canonical uppercase spelling, as validated and as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(RoomType::Single),
            "DOUBLE" => Ok(RoomType::Double),
            "SUITE" => Ok(RoomType::Suite),
            _ => Err(ValidationError::Format(Field::RoomType)),
        }
    }
}

/// A confirmed reservation as persisted in the reservation store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id_card: String,
    pub credit_card: String,
    pub name_surname: String,
    pub phone_number: String,
    pub room_type: RoomType,
    /// Arrival date as supplied, `dd/mm/yyyy`
    pub arrival_date: String,
    /// Number of nights, 1-10
    pub num_days: u32,
    /// Content-derived identifier, 32 hex digits
    pub localizer: String,
    /// Creation instant, Unix seconds UTC
    pub reserved_at: i64,
}

impl Reservation {
    /// Builds a reservation created at `reserved_at` and derives its
    /// localizer. Inputs are expected to be validated already.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id_card: &str,
        credit_card: &str,
        name_surname: &str,
        phone_number: &str,
        room_type: RoomType,
        arrival_date: &str,
        num_days: u32,
        reserved_at: i64,
    ) -> Self {
        let mut reservation = Self {
            id_card: id_card.to_string(),
            credit_card: credit_card.to_string(),
            name_surname: name_surname.to_string(),
            phone_number: phone_number.to_string(),
            room_type,
            arrival_date: arrival_date.to_string(),
            num_days,
            localizer: String::new(),
            reserved_at,
        };
        reservation.localizer = reservation.compute_localizer();
        reservation
    }

    /// Canonical signature string the localizer is derived from: fixed field
    /// order with a leading domain tag. The stored localizer itself never
    /// participates, so the derivation can be re-run over a loaded record.
    fn signature_payload(&self) -> String {
        format!(
            concat!(
                r#"{{"typ":"reservation","id_card":"{}","name_surname":"{}","#,
                r#""credit_card":"{}","phone_number":"{}","reserved_at":{},"#,
                r#""arrival_date":"{}","num_days":{},"room_type":"{}"}}"#
            ),
            self.id_card,
            self.name_surname,
            self.credit_card,
            self.phone_number,
            self.reserved_at,
            self.arrival_date,
            self.num_days,
            self.room_type,
        )
    }

    /// Localizer derivation: MD5 hex over the signature payload.
    ///
    /// Deterministic: identical content and creation instant always derive
    /// the identical localizer.
    pub fn compute_localizer(&self) -> String {
        md5_hex(&self.signature_payload())
    }
}
