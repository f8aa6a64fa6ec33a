// libs/doctor-cell/tests/booking_test.rs
use assert_matches::assert_matches;
use chrono::NaiveDate;
use uuid::Uuid;

use doctor_cell::models::{BookingError, Doctor, SlotsBooked};
use doctor_cell::services::{BookingService, SlotService};
use shared_models::SlotDate;

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn available_doctor() -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        available: true,
        slots_booked: SlotsBooked::new(),
    }
}

fn june_fifth() -> SlotDate {
    SlotDate::parse("5_6_2025").unwrap()
}

// ==============================================================================
// RESERVATION
// ==============================================================================

#[test]
fn test_reserve_claims_the_slot() {
    let service = BookingService::new();
    let mut doctor = available_doctor();

    service
        .reserve(&mut doctor, &june_fifth(), "10:30 AM")
        .unwrap();

    assert!(doctor.slots_booked.is_booked("5_6_2025", "10:30 AM"));
    assert!(!doctor.slots_booked.is_booked("5_6_2025", "11:00 AM"));
}

#[test]
fn test_double_booking_is_rejected() {
    let service = BookingService::new();
    let mut doctor = available_doctor();

    service
        .reserve(&mut doctor, &june_fifth(), "10:30 AM")
        .unwrap();

    assert_matches!(
        service.reserve(&mut doctor, &june_fifth(), "10:30 AM"),
        Err(BookingError::SlotTaken)
    );
}

#[test]
fn test_unavailable_doctor_rejects_reservations() {
    let service = BookingService::new();
    let mut doctor = available_doctor();
    doctor.available = false;

    assert_matches!(
        service.reserve(&mut doctor, &june_fifth(), "10:30 AM"),
        Err(BookingError::DoctorUnavailable)
    );
    assert!(doctor.slots_booked.is_empty());
}

#[test]
fn test_malformed_requests_never_reach_the_ledger() {
    let service = BookingService::new();
    let mut doctor = available_doctor();

    let impossible = SlotDate {
        day: 31,
        month: 2,
        year: 2025,
    };
    assert_matches!(
        service.reserve(&mut doctor, &impossible, "10:30 AM"),
        Err(BookingError::MalformedDate(_))
    );

    assert_matches!(
        service.reserve(&mut doctor, &june_fifth(), "teatime"),
        Err(BookingError::MalformedDate(_))
    );

    assert!(doctor.slots_booked.is_empty());
}

// ==============================================================================
// RELEASE
// ==============================================================================

#[test]
fn test_release_frees_the_slot_for_rebooking() {
    let service = BookingService::new();
    let mut doctor = available_doctor();

    service
        .reserve(&mut doctor, &june_fifth(), "10:30 AM")
        .unwrap();
    assert!(service.release(&mut doctor, &june_fifth(), "10:30 AM"));
    assert!(!doctor.slots_booked.is_booked("5_6_2025", "10:30 AM"));

    // Rebooking the freed slot succeeds.
    service
        .reserve(&mut doctor, &june_fifth(), "10:30 AM")
        .unwrap();
}

#[test]
fn test_release_of_unclaimed_slot_is_a_noop() {
    let service = BookingService::new();
    let mut doctor = available_doctor();

    assert!(!service.release(&mut doctor, &june_fifth(), "10:30 AM"));
}

// ==============================================================================
// INTERPLAY WITH SLOT GENERATION
// ==============================================================================

#[test]
fn test_reserved_slot_disappears_from_generated_grid() {
    let booking = BookingService::new();
    let slots = SlotService::new();
    let mut doctor = available_doctor();

    booking
        .reserve(&mut doctor, &june_fifth(), "10:30 AM")
        .unwrap();

    let now = NaiveDate::from_ymd_opt(2025, 6, 4)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let grid = slots.generate(&doctor, now);
    let june_fifth_group = grid
        .iter()
        .find(|day| day.date == NaiveDate::from_ymd_opt(2025, 6, 5).unwrap())
        .unwrap();

    assert!(june_fifth_group.slots.iter().all(|s| s.time != "10:30 AM"));
    assert!(june_fifth_group.slots.iter().any(|s| s.time == "10:00 AM"));
}
