//! Authentication against the controller backend

mod login;
mod token;

pub use login::*;
pub use token::*;
