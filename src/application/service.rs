use serde::Serialize;

use crate::domain::{quote_stay, Cents, Room, RoomNumber, RoomType, User};
use crate::storage::Registry;

use super::AppError;

/// Application service providing the reservation operations. This is the
/// primary interface for any client (interactive desk, scripts, tests).
pub struct ReservationService {
    registry: Registry,
    session: Session,
}

/// Who is currently logged in. At most one user at a time; a later
/// successful login replaces the current one, and there is no logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        username: String,
    },
}

impl Session {
    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { username } => Some(username),
        }
    }
}

/// A row in the available-rooms listing.
#[derive(Debug, Clone, Serialize)]
pub struct RoomListing {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub nightly_rate: Cents,
}

impl From<&Room> for RoomListing {
    fn from(room: &Room) -> Self {
        Self {
            number: room.number,
            room_type: room.room_type,
            nightly_rate: room.nightly_rate(),
        }
    }
}

/// A priced stay. Quoting never reserves the room.
#[derive(Debug, Clone, Serialize)]
pub struct BillQuote {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub nights: i64,
    pub total: Cents,
}

impl ReservationService {
    /// Service over the preset five-room catalog.
    pub fn new() -> Self {
        Self::with_registry(Registry::with_preset_rooms())
    }

    /// Service over a caller-supplied registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            session: Session::Anonymous,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========================
    // Accounts
    // ========================

    /// Register a new account. The new user starts with no bookings and is
    /// not logged in by signing up.
    pub fn signup(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        if self.registry.user(username).is_some() {
            return Err(AppError::DuplicateUsername(username.to_string()));
        }
        self.registry.insert_user(User::new(username, password));
        Ok(())
    }

    /// Authenticate and open a session. A failed attempt leaves the current
    /// session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self.registry.user(username) {
            Some(user) if user.check_password(password) => {
                self.session = Session::Authenticated {
                    username: username.to_string(),
                };
                true
            }
            _ => false,
        }
    }

    // ========================
    // Catalog queries (no login required)
    // ========================

    /// Available rooms in ascending room-number order.
    pub fn list_available_rooms(&self) -> Vec<RoomListing> {
        self.registry
            .available_rooms()
            .into_iter()
            .map(RoomListing::from)
            .collect()
    }

    /// Price a stay without reserving the room. Works for booked rooms too.
    pub fn quote_bill(&self, number: RoomNumber, nights: i64) -> Result<BillQuote, AppError> {
        let room = self
            .registry
            .room(number)
            .ok_or(AppError::RoomNotFound(number))?;
        let total = quote_stay(room.room_type, nights)?;
        Ok(BillQuote {
            number: room.number,
            room_type: room.room_type,
            nights,
            total,
        })
    }

    // ========================
    // Bookings
    // ========================

    /// Book a room for the current user.
    pub fn book(&mut self, number: RoomNumber) -> Result<(), AppError> {
        let username = self.current_user()?.username.clone();

        let room = self
            .registry
            .room_mut(number)
            .ok_or(AppError::RoomNotFound(number))?;
        room.mark_booked()?;

        let user = self
            .registry
            .user_mut(&username)
            .expect("session user is registered");
        user.add_booking(number);
        Ok(())
    }

    /// Cancel one of the current user's bookings. Only the holder may
    /// cancel: a room held by somebody else is `NotYourBooking`.
    pub fn cancel(&mut self, number: RoomNumber) -> Result<(), AppError> {
        let username = self.current_user()?.username.clone();

        if self.registry.room(number).is_none() {
            return Err(AppError::RoomNotFound(number));
        }

        let user = self
            .registry
            .user_mut(&username)
            .expect("session user is registered");
        if !user.has_booking(number) {
            return Err(AppError::NotYourBooking(number));
        }
        user.remove_booking(number);

        if let Some(room) = self.registry.room_mut(number) {
            room.mark_vacant();
        }
        Ok(())
    }

    /// Room numbers held by the current user, in booking order. An empty
    /// list is a normal outcome, not an error.
    pub fn my_bookings(&self) -> Result<Vec<RoomNumber>, AppError> {
        Ok(self.current_user()?.booked_rooms().to_vec())
    }

    fn current_user(&self) -> Result<&User, AppError> {
        let username = self.session.username().ok_or(AppError::NotLoggedIn)?;
        // A session can only reference a registered user, and accounts are
        // never deleted.
        self.registry.user(username).ok_or(AppError::NotLoggedIn)
    }
}

impl Default for ReservationService {
    fn default() -> Self {
        Self::new()
    }
}
