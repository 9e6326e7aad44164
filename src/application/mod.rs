mod error;
mod service;

pub use error::AppError;
pub use service::{BillQuote, ReservationService, RoomListing, Session};
