use serde::Serialize;

use super::Cents;

/// Rooms are identified by their number, assigned once when the catalog is
/// seeded.
pub type RoomNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Standard double room billed per night
    Deluxe,
    /// Larger room with a higher rate plus a flat per-stay surcharge
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deluxe" => Some(RoomType::Deluxe),
            "suite" => Some(RoomType::Suite),
            _ => None,
        }
    }

    /// Nightly rate in cents. Rates are fixed per type, not per room.
    pub fn nightly_rate(&self) -> Cents {
        match self {
            RoomType::Deluxe => 15000,
            RoomType::Suite => 30000,
        }
    }

    /// Flat per-stay surcharge in cents, charged once regardless of stay
    /// length.
    pub fn stay_surcharge(&self) -> Cents {
        match self {
            RoomType::Deluxe => 0,
            RoomType::Suite => 10000,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bookable unit. A room is available iff no active booking holds it.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub available: bool,
}

impl Room {
    pub fn new(number: RoomNumber, room_type: RoomType) -> Self {
        Self {
            number,
            room_type,
            available: true,
        }
    }

    pub fn nightly_rate(&self) -> Cents {
        self.room_type.nightly_rate()
    }

    /// Claim the room for a booking. Fails when the room is already held.
    pub fn mark_booked(&mut self) -> Result<(), RoomStateError> {
        if !self.available {
            return Err(RoomStateError::AlreadyBooked(self.number));
        }
        self.available = false;
        Ok(())
    }

    /// Release the room. Releasing a vacant room is a no-op.
    pub fn mark_vacant(&mut self) {
        self.available = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomStateError {
    AlreadyBooked(RoomNumber),
}

impl std::fmt::Display for RoomStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomStateError::AlreadyBooked(number) => {
                write!(f, "room {} is already booked", number)
            }
        }
    }
}

impl std::error::Error for RoomStateError {}
