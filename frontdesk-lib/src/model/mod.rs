//! Data transfer objects for the front-desk backend

mod booking;
mod credential;
mod hotel;
mod pms;
mod user;

pub use booking::*;
pub use credential::*;
pub use hotel::*;
pub use pms::*;
pub use user::*;
