use thiserror::Error;

use crate::domain::{RoomNumber, RoomStateError, StayError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    #[error("Room {0} is already booked")]
    AlreadyBooked(RoomNumber),

    #[error("Room {0} is not booked by you")]
    NotYourBooking(RoomNumber),

    #[error("Invalid stay length: {0} nights")]
    InvalidStayLength(i64),
}

impl From<RoomStateError> for AppError {
    fn from(err: RoomStateError) -> Self {
        match err {
            RoomStateError::AlreadyBooked(number) => AppError::AlreadyBooked(number),
        }
    }
}

impl From<StayError> for AppError {
    fn from(err: StayError) -> Self {
        match err {
            StayError::InvalidStayLength(nights) => AppError::InvalidStayLength(nights),
        }
    }
}
