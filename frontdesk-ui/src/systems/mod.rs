//! Orchestration systems.
//!
//! Headless flows tying the API client, the table engine, the desk
//! registry and the timers together: login with lockout handling, the
//! credential overview with its push subscription, and the
//! booking/credential comparison flow.

pub mod comparison;
pub mod credentials;
pub mod login;

pub use comparison::ComparisonFlow;
pub use credentials::CredentialOverview;
pub use login::LoginSystem;
