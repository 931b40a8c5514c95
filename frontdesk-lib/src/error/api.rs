//! API error types

use std::time::Duration;

use super::ProblemDetail;

/// Errors that can occur during REST calls against the controller API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message or raw response body.
        message: String,
        /// Parsed problem payload, if the body carried one.
        problem: Option<Box<ProblemDetail>>,
    },

    /// Uniqueness violation reported by the backend (duplicate hotel or
    /// user id). Callers map this to a field-level error on the
    /// originating form control.
    #[error("duplicate identifier: {0}")]
    Conflict(Box<ProblemDetail>),

    /// Network error during the call.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a response body.
    #[error("response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error without a problem payload.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            problem: None,
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Conflict(problem) => problem.status,
            _ => None,
        }
    }

    /// Returns `true` if this error is a backend uniqueness violation.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns `true` if the call may succeed when simply retried.
    ///
    /// No automatic retry happens anywhere in this crate; the caller
    /// surfaces a notification and lets the user resubmit.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Network(_) => true,
            Self::Timeout(_) => true,
            _ => false,
        }
    }
}
