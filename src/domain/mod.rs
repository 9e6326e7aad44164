mod billing;
mod room;
mod user;

pub use billing::*;
pub use room::*;
pub use user::*;
