use std::fmt;

use super::RoomType;

/// Money is represented as integer cents to avoid floating-point precision
/// issues in bill output. $150.00 = 15000 cents.
pub type Cents = i64;

/// Format cents as a human-readable currency string.
/// Example: 45000 -> "450.00", 1 -> "0.01"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Total charge for a stay: nights times the nightly rate, plus the flat
/// per-stay surcharge where the room type carries one.
///
/// A stay must be at least one night long.
pub fn quote_stay(room_type: RoomType, nights: i64) -> Result<Cents, StayError> {
    if nights <= 0 {
        return Err(StayError::InvalidStayLength(nights));
    }
    Ok(nights * room_type.nightly_rate() + room_type.stay_surcharge())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayError {
    InvalidStayLength(i64),
}

impl fmt::Display for StayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StayError::InvalidStayLength(nights) => {
                write!(f, "stay must be at least one night, got {}", nights)
            }
        }
    }
}

impl std::error::Error for StayError {}
