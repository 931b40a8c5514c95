//! REST collaborators of the front-desk client
//!
//! One module per backend resource: hotels (with embedded desk CRUD),
//! staff users, booking lookup and check-in credentials. Each operation is
//! a thin authenticated call; non-success responses are classified through
//! the problem payload into the error taxonomy.

mod bookings;
mod checkin;
mod hotels;
mod users;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::error::Error;
use crate::error::ProblemDetail;

/// Checks a response status, classifying failures.
///
/// Uniqueness violations become [`ApiError::Conflict`]; everything else
/// keeps its status and body (plus the parsed problem payload when the
/// body carries one).
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let problem = ProblemDetail::parse(&body);

    if let Some(problem) = &problem
        && problem.is_duplicate()
    {
        return Err(ApiError::Conflict(Box::new(problem.clone())).into());
    }

    Err(ApiError::Http {
        status: status.as_u16(),
        message: body,
        problem: problem.map(Box::new),
    }
    .into())
}

/// Reads a checked response body as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let body = response.text().await.map_err(ApiError::from)?;
    serde_json::from_str(&body)
        .map_err(|err| ApiError::parse_with_body(err.to_string(), body).into())
}
