//! Login flow against the authenticate endpoint

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::SessionToken;
use crate::error::AuthError;

/// Username and password submitted from the login form.
///
/// Values are expected to be sanitized (trimmed) by the form layer before
/// they reach this flow.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Authentication response body.
///
/// On success `id_token` carries the JWT. On 401 the backend reuses the
/// same field for its failure payload: a small integer with the remaining
/// attempts, or an RFC 3339 timestamp with the end of an IP lockout.
#[derive(Debug, Deserialize)]
struct AuthenticateResponse {
    id_token: String,
}

/// Authenticates against the backend and returns a session token.
///
/// Failure classification is structural: the 401 payload is parsed as a
/// remaining-attempts counter first and as a lockout timestamp second.
/// Anything else degrades to [`AuthError::InvalidCredentials`].
pub async fn authenticate(
    http: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<SessionToken, AuthError> {
    let url = format!("{}/api/authenticate", base_url.trim_end_matches('/'));

    let response = http.post(&url).json(credentials).send().await?;
    let status = response.status();

    if status.is_success() {
        let body: AuthenticateResponse = response
            .json()
            .await
            .map_err(|err| AuthError::Parse(err.to_string()))?;
        return Ok(SessionToken::new(body.id_token));
    }

    if status.as_u16() == 401 {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_rejection(&body));
    }

    Err(AuthError::Unexpected {
        status: status.as_u16(),
    })
}

/// Unauthenticated client for the login endpoint.
///
/// Login happens before any session token exists, so this client is
/// separate from [`crate::FrontdeskClient`]; the token it returns seeds a
/// token provider for the authenticated client.
#[derive(Clone)]
pub struct LoginClient {
    http: reqwest::Client,
    base_url: String,
}

impl LoginClient {
    /// Creates a login client for the given controller base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a login client reusing an existing HTTP client.
    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Authenticates with the given credentials.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        authenticate(&self.http, &self.base_url, credentials).await
    }
}

/// Classifies a 401 body into the remaining-attempts or lockout case.
fn classify_rejection(body: &str) -> AuthError {
    let Ok(payload) = serde_json::from_str::<AuthenticateResponse>(body) else {
        return AuthError::InvalidCredentials;
    };

    if let Ok(remaining) = payload.id_token.parse::<u32>() {
        return AuthError::AttemptsRemaining { remaining };
    }

    if let Ok(until) = payload.id_token.parse::<DateTime<Utc>>() {
        return AuthError::LockedOut { until };
    }

    AuthError::InvalidCredentials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_attempts_payload() {
        let error = classify_rejection(r#"{"id_token": "2"}"#);
        assert!(matches!(
            error,
            AuthError::AttemptsRemaining { remaining: 2 }
        ));
    }

    #[test]
    fn test_lockout_payload() {
        let error = classify_rejection(r#"{"id_token": "2021-06-17T09:55:27.969674Z"}"#);
        match error {
            AuthError::LockedOut { until } => {
                assert_eq!(until.timestamp(), 1623923727);
            }
            other => panic!("expected lockout, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_payload() {
        assert!(matches!(
            classify_rejection("not json"),
            AuthError::InvalidCredentials
        ));
        assert!(matches!(
            classify_rejection(r#"{"id_token": "nonsense"}"#),
            AuthError::InvalidCredentials
        ));
    }
}
