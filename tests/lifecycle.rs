//! Lifecycle invariant tests
//!
//! Drives reservation -> stay -> checkout over real store files at fixed
//! instants, so every date gate and uniqueness surface is exercised
//! deterministically:
//! - integrity: an edited record is detected at check-in
//! - ownership: a localizer only checks in with its own id card
//! - date gates: arrival and departure must equal today
//! - uniqueness: each transition happens at most once

use std::fs;

use chrono::{TimeZone, Utc};
use serde_json::Value;
use tempfile::TempDir;

use hotelier::config::StoreConfig;
use hotelier::manager::{FixedClock, HotelManager, ManagerError, ReservationRequest};

// =============================================================================
// Test Utilities
// =============================================================================

fn request() -> ReservationRequest {
    ReservationRequest {
        id_card: "12345678Z".to_string(),
        credit_card: "4532015112830366".to_string(),
        name_surname: "John Doe Smith".to_string(),
        phone_number: "+123456789".to_string(),
        room_type: "DOUBLE".to_string(),
        arrival_date: "17/07/2026".to_string(),
        num_days: "3".to_string(),
    }
}

fn manager_on(dir: &TempDir, (y, m, d): (i32, u32, u32)) -> HotelManager<FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap());
    HotelManager::with_clock(&StoreConfig::at(dir.path()), clock)
}

fn store_records(path: &std::path::Path) -> Vec<Value> {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str::<Value>(&text)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_full_lifecycle_reserve_checkin_checkout() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());

    // reserve, then arrive on the reservation's arrival day
    let manager = manager_on(&dir, (2026, 7, 17));
    let localizer = manager.reserve(&request()).unwrap();
    assert_eq!(localizer.len(), 32);

    let room_key = manager.guest_arrival(&localizer, "12345678Z").unwrap();
    assert_eq!(room_key.len(), 64);

    // the stay store holds exactly one record carrying that room key
    let stays = store_records(&config.stays_path());
    assert_eq!(stays.len(), 1);
    assert_eq!(stays[0]["room_key"], Value::String(room_key.clone()));
    assert_eq!(stays[0]["localizer"], Value::String(localizer));

    // checkout on the departure day (3 nights after arrival)
    let manager = manager_on(&dir, (2026, 7, 20));
    manager.guest_checkout(&room_key).unwrap();
    let checkouts = store_records(&config.checkouts_path());
    assert_eq!(checkouts.len(), 1);
    assert_eq!(checkouts[0]["room_key"], Value::String(room_key.clone()));

    // the stay is terminal: a second checkout is rejected
    let err = manager.guest_checkout(&room_key).unwrap_err();
    assert!(matches!(err, ManagerError::AlreadyCheckedOut));
    assert_eq!(store_records(&config.checkouts_path()).len(), 1);
}

// =============================================================================
// Ownership and integrity gates
// =============================================================================

#[test]
fn test_arrival_with_anothers_id_card_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manager = manager_on(&dir, (2026, 7, 17));
    let localizer = manager.reserve(&request()).unwrap();

    // 87654321 % 23 == 10 -> 'X': a valid id card, but not the holder's
    let err = manager.guest_arrival(&localizer, "87654321X").unwrap_err();
    assert!(matches!(err, ManagerError::WrongIdCardForLocalizer));
}

#[test]
fn test_edited_reservation_fails_the_integrity_gate() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());
    let manager = manager_on(&dir, (2026, 7, 17));
    let localizer = manager.reserve(&request()).unwrap();

    // bump num_days in the persisted record without re-deriving the localizer
    let mut records = store_records(&config.reservations_path());
    records[0]["num_days"] = serde_json::json!(9);
    fs::write(
        config.reservations_path(),
        serde_json::to_string_pretty(&records).unwrap(),
    )
    .unwrap();

    let err = manager.guest_arrival(&localizer, "12345678Z").unwrap_err();
    assert!(matches!(err, ManagerError::ReservationManipulated(_)));
    // the failed arrival must not have opened a stay
    assert!(!config.stays_path().exists());
}

// =============================================================================
// Date gates
// =============================================================================

#[test]
fn test_arrival_on_another_day_is_rejected() {
    let dir = TempDir::new().unwrap();
    let localizer = manager_on(&dir, (2026, 7, 16))
        .reserve(&request())
        .unwrap();

    let err = manager_on(&dir, (2026, 7, 16))
        .guest_arrival(&localizer, "12345678Z")
        .unwrap_err();
    assert!(matches!(err, ManagerError::NotArrivalDate));
}

#[test]
fn test_checkout_before_the_departure_day_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manager = manager_on(&dir, (2026, 7, 17));
    let localizer = manager.reserve(&request()).unwrap();
    let room_key = manager.guest_arrival(&localizer, "12345678Z").unwrap();

    // still on the arrival day
    let err = manager.guest_checkout(&room_key).unwrap_err();
    assert!(matches!(err, ManagerError::NotDepartureDate));
    assert!(!StoreConfig::at(dir.path()).checkouts_path().exists());
}

// =============================================================================
// Uniqueness surfaces
// =============================================================================

#[test]
fn test_repeated_check_in_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manager = manager_on(&dir, (2026, 7, 17));
    let localizer = manager.reserve(&request()).unwrap();
    manager.guest_arrival(&localizer, "12345678Z").unwrap();

    // the repeat derives the identical room key and hits the uniqueness check
    let err = manager.guest_arrival(&localizer, "12345678Z").unwrap_err();
    assert!(matches!(err, ManagerError::AlreadyCheckedIn));
    assert_eq!(
        store_records(&StoreConfig::at(dir.path()).stays_path()).len(),
        1
    );
}

#[test]
fn test_duplicate_reservation_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::at(dir.path());
    let manager = manager_on(&dir, (2026, 7, 1));
    manager.reserve(&request()).unwrap();

    // identical content under an identical instant derives the same localizer
    let err = manager.reserve(&request()).unwrap_err();
    assert!(matches!(err, ManagerError::ReservationExists));
    assert_eq!(store_records(&config.reservations_path()).len(), 1);
}
