//! Error types

mod api;
mod auth;
mod problem;
mod validation;

pub use api::*;
pub use auth::*;
pub use problem::*;
pub use validation::*;

/// Top-level error for client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from a REST call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Error from the authentication flow.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl Error {
    /// Returns `true` if this error is a backend uniqueness violation
    /// that should map to a field-level form error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_conflict())
    }

    /// Maps a uniqueness violation onto the form field that caused it.
    ///
    /// Returns `None` for every other error; those go to the global
    /// notification channel instead.
    pub fn to_field_error(&self, field: &str) -> Option<FieldValidationError> {
        match self {
            Self::Api(ApiError::Conflict(problem)) => Some(FieldValidationError::with_code(
                field,
                problem.to_string(),
                "duplicate",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict() -> Error {
        let problem = ProblemDetail {
            status: Some(400),
            title: Some("Bad Request".to_string()),
            detail: Some("A hotel with the given id already exists.".to_string()),
            ..ProblemDetail::default()
        };
        Error::Api(ApiError::Conflict(Box::new(problem)))
    }

    #[test]
    fn test_conflict_maps_to_a_field_error() {
        let error = conflict();
        assert!(error.is_conflict());

        let field_error = error.to_field_error("id").unwrap();
        assert_eq!(field_error.field, "id");
        assert_eq!(field_error.code.as_deref(), Some("duplicate"));
    }

    #[test]
    fn test_other_errors_stay_global() {
        let error = Error::Api(ApiError::http(500, "boom"));
        assert!(!error.is_conflict());
        assert!(error.to_field_error("id").is_none());
    }
}
