//! Staff user DTO

use serde::Deserialize;
use serde::Serialize;

/// Authority granted to administrative staff accounts.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A staff account that can sign in at the front desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Login name, unique per backend; the backend rejects duplicates.
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Granted authorities, e.g. [`ROLE_ADMIN`].
    #[serde(default)]
    pub authorities: Vec<String>,
}

impl User {
    /// Returns `true` if the account carries the admin authority.
    pub fn is_admin(&self) -> bool {
        self.authorities.iter().any(|role| role == ROLE_ADMIN)
    }
}
