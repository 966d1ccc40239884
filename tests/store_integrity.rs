//! Store integrity tests
//!
//! A malformed store file must abort the operation explicitly, and a failed
//! operation must never leave a partial write behind.

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use hotelier::config::StoreConfig;
use hotelier::manager::{FixedClock, HotelManager, ManagerError, ReservationRequest};
use hotelier::store::StoreError;

fn request() -> ReservationRequest {
    ReservationRequest {
        id_card: "12345678Z".to_string(),
        credit_card: "4111111111111111".to_string(),
        name_surname: "Jane Doe Brown".to_string(),
        phone_number: "+987654321".to_string(),
        room_type: "SINGLE".to_string(),
        arrival_date: "05/03/2026".to_string(),
        num_days: "2".to_string(),
    }
}

fn manager_on(dir: &TempDir, (y, m, d): (i32, u32, u32)) -> HotelManager<FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap());
    HotelManager::with_clock(&StoreConfig::at(dir.path()), clock)
}

#[test]
fn test_corrupt_reservation_store_aborts_reserve() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());
    fs::create_dir_all(&config.data_dir).unwrap();
    fs::write(config.reservations_path(), "]] truncated garbage").unwrap();

    let err = manager_on(&dir, (2026, 3, 1)).reserve(&request()).unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Store(StoreError::Corrupt { .. })
    ));
    // the corrupt file is left as-is for inspection, never overwritten
    assert_eq!(
        fs::read_to_string(config.reservations_path()).unwrap(),
        "]] truncated garbage"
    );
}

#[test]
fn test_corrupt_reservation_store_aborts_arrival() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());
    let manager = manager_on(&dir, (2026, 3, 5));
    let localizer = manager.reserve(&request()).unwrap();

    fs::write(config.reservations_path(), r#"{"not": "an array"}"#).unwrap();
    let err = manager
        .guest_arrival(&localizer, "12345678Z")
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Store(StoreError::Corrupt { .. })
    ));
}

#[test]
fn test_record_missing_fields_is_corruption_not_a_panic() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());
    fs::create_dir_all(&config.data_dir).unwrap();
    // a record array whose entry is not a reservation
    fs::write(
        config.reservations_path(),
        r#"[{"localizer": "00112233445566778899aabbccddeeff"}]"#,
    )
    .unwrap();

    let err = manager_on(&dir, (2026, 3, 5))
        .guest_arrival("00112233445566778899aabbccddeeff", "12345678Z")
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Store(StoreError::Corrupt { .. })
    ));
}

#[test]
fn test_failed_checkout_leaves_no_checkout_store() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());
    let manager = manager_on(&dir, (2026, 3, 5));
    let localizer = manager.reserve(&request()).unwrap();
    let room_key = manager.guest_arrival(&localizer, "12345678Z").unwrap();

    // wrong day: validation fails before any write to the checkout store
    let err = manager.guest_checkout(&room_key).unwrap_err();
    assert!(matches!(err, ManagerError::NotDepartureDate));
    assert!(!config.checkouts_path().exists());
}

#[test]
fn test_checkout_without_stay_store_is_a_missing_store() {
    let dir = TempDir::new().unwrap();
    let err = manager_on(&dir, (2026, 3, 7))
        .guest_checkout(&"ab".repeat(32))
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Store(StoreError::Missing { .. })
    ));
}
