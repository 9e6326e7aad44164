// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use albergo::application::ReservationService;

/// Service over the preset catalog with a registered, logged-in guest.
pub fn logged_in_service(username: &str) -> ReservationService {
    let mut service = ReservationService::new();
    signup_and_login(&mut service, username, "secret");
    service
}

/// Register an account and open a session for it.
pub fn signup_and_login(service: &mut ReservationService, username: &str, password: &str) {
    service
        .signup(username, password)
        .expect("signup should succeed");
    assert!(service.login(username, password), "login should succeed");
}

/// Room numbers from an available-rooms listing.
pub fn available_numbers(service: &ReservationService) -> Vec<u32> {
    service
        .list_available_rooms()
        .iter()
        .map(|room| room.number)
        .collect()
}
