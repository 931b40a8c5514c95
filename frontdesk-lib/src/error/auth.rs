//! Authentication error types

use chrono::DateTime;
use chrono::Utc;

/// Errors that can occur during the login flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Wrong username or password, with the backend's remaining-attempts
    /// counter from the failure payload.
    #[error("invalid credentials, {remaining} attempts remaining")]
    AttemptsRemaining {
        /// Login attempts left before the address is blocked.
        remaining: u32,
    },

    /// The caller's address is blocked; login stays disabled until the
    /// given instant.
    #[error("login blocked until {until}")]
    LockedOut {
        /// End of the lockout window.
        until: DateTime<Utc>,
    },

    /// Wrong username or password without a usable failure payload.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The stored session token is no longer valid.
    #[error("session expired")]
    SessionExpired,

    /// Network error during authentication.
    #[error("network error during auth: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse the authentication response.
    #[error("auth response parse error: {0}")]
    Parse(String),

    /// The backend answered with a status the flow does not know.
    #[error("unexpected auth response: HTTP {status}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
    },
}

impl AuthError {
    /// Returns `true` if this failure carries a lockout window.
    pub fn is_lockout(&self) -> bool {
        matches!(self, Self::LockedOut { .. })
    }
}
