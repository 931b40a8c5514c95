//! Form validation.
//!
//! Field-level rules for the login and management forms. Validation
//! errors stay local to the form; nothing here ever reaches the network
//! layer.
//!
//! # Example
//!
//! ```ignore
//! use frontdesk_ui::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("username", username)
//!         .required("Username is required")
//!         .no_whitespace("Username must not contain whitespace")
//!     .field("password", password)
//!         .required("Password is required")
//!         .strong_password("Password is too weak")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Submit form
//! }
//! ```

mod result;
mod rules;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use rules::sanitize;
pub use validator::{FieldBuilder, Validator};
