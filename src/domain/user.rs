use super::RoomNumber;

/// A registered guest account. Accounts live for the process lifetime;
/// there is no deletion.
///
/// Passwords are stored and compared as plain text. This is a demo posture,
/// not a hardened login system.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    password: String,
    booked_rooms: Vec<RoomNumber>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            booked_rooms: Vec::new(),
        }
    }

    /// Byte-for-byte password comparison, no hashing or normalization.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn has_booking(&self, number: RoomNumber) -> bool {
        self.booked_rooms.contains(&number)
    }

    /// Record a held room. Booking order is preserved for display; a number
    /// already present is not added twice.
    pub fn add_booking(&mut self, number: RoomNumber) {
        if !self.has_booking(number) {
            self.booked_rooms.push(number);
        }
    }

    pub fn remove_booking(&mut self, number: RoomNumber) {
        self.booked_rooms.retain(|n| *n != number);
    }

    /// Held room numbers in booking order.
    pub fn booked_rooms(&self) -> &[RoomNumber] {
        &self.booked_rooms
    }
}
