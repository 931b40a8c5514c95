//! Problem payload from the controller backend

use serde::Deserialize;

/// Structured error body the backend attaches to 4xx responses.
///
/// The shape follows the RFC 7807 problem convention: a type URI, a short
/// title, the HTTP status, a human-readable detail line and the request
/// path. Every field is optional; bodies that deserialize but carry none
/// of them are not treated as problems.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemDetail {
    /// Problem type URI.
    #[serde(rename = "type")]
    pub type_uri: Option<String>,
    /// Short summary, e.g. "Bad Request".
    pub title: Option<String>,
    /// HTTP status code repeated in the body.
    pub status: Option<u16>,
    /// Human-readable description of the failure.
    pub detail: Option<String>,
    /// Request path that produced the problem.
    pub path: Option<String>,
    /// Machine-oriented message key, e.g. "error.http.400".
    pub message: Option<String>,
}

impl ProblemDetail {
    /// Parses a response body into a problem payload.
    ///
    /// Returns `None` for bodies that are not JSON or deserialize to an
    /// entirely empty payload.
    pub fn parse(body: &str) -> Option<Self> {
        let problem: Self = serde_json::from_str(body).ok()?;
        if problem.title.is_none() && problem.detail.is_none() && problem.message.is_none() {
            return None;
        }
        Some(problem)
    }

    /// Returns `true` if this problem reports a uniqueness violation
    /// (duplicate hotel or user id).
    ///
    /// The backend exposes no structured duplicate code; the only signal
    /// is the detail text of its 400 response.
    pub fn is_duplicate(&self) -> bool {
        self.status == Some(400)
            && self
                .detail
                .as_deref()
                .is_some_and(|detail| detail.contains("already exists"))
    }
}

impl std::fmt::Display for ProblemDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.title.as_deref().unwrap_or("problem");
        match self.detail.as_deref() {
            Some(detail) => write!(f, "{}: {}", title, detail),
            None => write!(f, "{}", title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUPLICATE_USER: &str = r#"{
        "type": "https://www.jhipster.tech/problem/problem-with-message",
        "title": "Bad Request",
        "status": 400,
        "detail": "400 BAD_REQUEST \"A user with the given login already exists.\"",
        "path": "/api/users",
        "message": "error.http.400"
    }"#;

    #[test]
    fn test_parse_duplicate_problem() {
        let problem = ProblemDetail::parse(DUPLICATE_USER).unwrap();
        assert_eq!(problem.status, Some(400));
        assert!(problem.is_duplicate());
    }

    #[test]
    fn test_other_bad_request_is_not_duplicate() {
        let problem = ProblemDetail::parse(
            r#"{"title": "Bad Request", "status": 400, "detail": "malformed payload"}"#,
        )
        .unwrap();
        assert!(!problem.is_duplicate());
    }

    #[test]
    fn test_non_problem_bodies() {
        assert!(ProblemDetail::parse("<html>oops</html>").is_none());
        assert!(ProblemDetail::parse("{}").is_none());
    }
}
