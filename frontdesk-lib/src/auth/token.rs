//! TokenProvider trait and SessionToken

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::error::AuthError;

/// A session token returned by a successful login.
///
/// The backend issues a JWT in the `id_token` field of the authentication
/// response; expiry is known only when the caller decodes it, so it is
/// optional here.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// The bearer token used for API authentication.
    pub token: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Creates a new session token with just the token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    /// Creates a new session token with a known expiry.
    pub fn with_expiry(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Returns `true` if the token has expired.
    ///
    /// Returns `false` if the expiry is unknown.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Utc::now() >= exp)
    }

    /// Returns the token as a bearer authorization header value.
    pub fn as_bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Source of session tokens for API calls.
///
/// The client asks its provider for a token before every request, so
/// implementations can transparently re-login or refresh.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a token valid for the next request.
    async fn session_token(&self) -> Result<SessionToken, AuthError>;
}

/// Token provider that always returns the same token.
///
/// Useful for short-lived tools and tests; a real desk session re-logs in
/// when [`AuthError::SessionExpired`] surfaces.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: SessionToken,
}

impl StaticTokenProvider {
    /// Creates a provider wrapping the given token.
    pub fn new(token: SessionToken) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn session_token(&self) -> Result<SessionToken, AuthError> {
        if self.token.is_expired() {
            return Err(AuthError::SessionExpired);
        }
        Ok(self.token.clone())
    }
}
