//! Hotel resource, with desk CRUD embedded

use reqwest::Method;

use super::check_status;
use super::read_json;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Desk;
use crate::model::Hotel;
use crate::FrontdeskClient;

impl FrontdeskClient {
    /// Retrieves the hotel the authenticated staff account belongs to.
    pub async fn my_hotel(&self) -> Result<Hotel, Error> {
        let response = self
            .request(Method::GET, "/api/hotels/my")
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Retrieves a hotel by id.
    pub async fn hotel(&self, id: &str) -> Result<Hotel, Error> {
        let path = format!("/api/hotels/{}", urlencoding::encode(id));
        let response = self
            .request(Method::GET, &path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Retrieves all hotels (admin only).
    pub async fn all_hotels(&self) -> Result<Vec<Hotel>, Error> {
        let response = self
            .request(Method::GET, "/api/hotels")
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Creates a hotel.
    ///
    /// A duplicate hotel id surfaces as [`ApiError::Conflict`] so the form
    /// layer can flag the id control.
    pub async fn create_hotel(&self, hotel: &Hotel) -> Result<Hotel, Error> {
        let response = self
            .request(Method::POST, "/api/hotels")
            .await?
            .json(hotel)
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Updates a hotel, including its desk list.
    pub async fn update_hotel(&self, hotel: &Hotel) -> Result<Hotel, Error> {
        let response = self
            .request(Method::PUT, "/api/hotels")
            .await?
            .json(hotel)
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Deletes a hotel.
    pub async fn delete_hotel(&self, id: &str) -> Result<(), Error> {
        let path = format!("/api/hotels/{}", urlencoding::encode(id));
        let response = self
            .request(Method::DELETE, &path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        check_status(response).await?;
        Ok(())
    }

    /// Adds a desk to a hotel.
    pub async fn add_desk(&self, hotel_id: &str, desk: &Desk) -> Result<Desk, Error> {
        let path = format!("/api/hotels/{}/desks", urlencoding::encode(hotel_id));
        let response = self
            .request(Method::POST, &path)
            .await?
            .json(desk)
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Updates a desk, typically to rename it.
    pub async fn update_desk(&self, hotel_id: &str, desk: &Desk) -> Result<Desk, Error> {
        let path = format!(
            "/api/hotels/{}/desks/{}",
            urlencoding::encode(hotel_id),
            urlencoding::encode(&desk.id)
        );
        let response = self
            .request(Method::PUT, &path)
            .await?
            .json(desk)
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Removes a desk from a hotel.
    pub async fn delete_desk(&self, hotel_id: &str, desk_id: &str) -> Result<(), Error> {
        let path = format!(
            "/api/hotels/{}/desks/{}",
            urlencoding::encode(hotel_id),
            urlencoding::encode(desk_id)
        );
        let response = self
            .request(Method::DELETE, &path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        check_status(response).await?;
        Ok(())
    }
}
