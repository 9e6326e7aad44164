use albergo::application::{AppError, ReservationService};
use albergo::domain::{format_cents, RoomType};

mod common;
use common::logged_in_service;

#[test]
fn test_deluxe_bill_is_rate_times_nights() {
    let service = ReservationService::new();
    // Room 1 is a deluxe room at 150.00 per night.
    let quote = service.quote_bill(1, 3).unwrap();
    assert_eq!(quote.room_type, RoomType::Deluxe);
    assert_eq!(quote.total, 45000);
    assert_eq!(format_cents(quote.total), "450.00");
}

#[test]
fn test_suite_bill_adds_flat_surcharge() {
    let service = ReservationService::new();
    // Room 4 is a suite at 300.00 per night plus a 100.00 stay surcharge.
    let quote = service.quote_bill(4, 3).unwrap();
    assert_eq!(quote.room_type, RoomType::Suite);
    assert_eq!(quote.total, 100000);
    assert_eq!(format_cents(quote.total), "1000.00");
}

#[test]
fn test_one_night_stays() {
    let service = ReservationService::new();
    assert_eq!(service.quote_bill(1, 1).unwrap().total, 15000);
    assert_eq!(service.quote_bill(5, 1).unwrap().total, 40000);
}

#[test]
fn test_quoting_requires_no_login() {
    let service = ReservationService::new();
    assert!(service.quote_bill(2, 2).is_ok());
}

#[test]
fn test_quoting_an_unknown_room_fails() {
    let service = ReservationService::new();
    assert!(matches!(
        service.quote_bill(42, 2),
        Err(AppError::RoomNotFound(42))
    ));
}

#[test]
fn test_non_positive_stay_lengths_rejected() {
    let service = ReservationService::new();
    assert!(matches!(
        service.quote_bill(1, 0),
        Err(AppError::InvalidStayLength(0))
    ));
    assert!(matches!(
        service.quote_bill(4, -3),
        Err(AppError::InvalidStayLength(-3))
    ));
}

#[test]
fn test_booked_rooms_can_still_be_quoted() {
    let mut service = logged_in_service("alice");
    service.book(4).unwrap();
    // Quoting prices a stay; it neither checks nor changes availability.
    assert_eq!(service.quote_bill(4, 2).unwrap().total, 70000);
}
