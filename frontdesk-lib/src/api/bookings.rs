//! Booking lookup resource

use reqwest::Method;

use super::check_status;
use super::read_json;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::BookingData;
use crate::FrontdeskClient;

impl FrontdeskClient {
    /// Looks up booking records, optionally filtered by a free-text
    /// search string.
    ///
    /// An empty or absent search returns every booking the backend is
    /// willing to page out.
    pub async fn find_bookings(&self, search: Option<&str>) -> Result<Vec<BookingData>, Error> {
        let path = match search.filter(|term| !term.is_empty()) {
            Some(term) => format!("/api/booking-data?search={}", urlencoding::encode(term)),
            None => "/api/booking-data".to_string(),
        };
        let response = self
            .request(Method::GET, &path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }
}
