//! Staff user resource

use reqwest::Method;

use super::check_status;
use super::read_json;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::User;
use crate::FrontdeskClient;

impl FrontdeskClient {
    /// Retrieves all staff accounts (admin only).
    pub async fn all_users(&self) -> Result<Vec<User>, Error> {
        let response = self
            .request(Method::GET, "/api/users")
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Creates a staff account.
    ///
    /// A duplicate login surfaces as [`ApiError::Conflict`].
    pub async fn create_user(&self, user: &User) -> Result<User, Error> {
        let response = self
            .request(Method::POST, "/api/users")
            .await?
            .json(user)
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Updates a staff account.
    pub async fn update_user(&self, user: &User) -> Result<User, Error> {
        let response = self
            .request(Method::PUT, "/api/users")
            .await?
            .json(user)
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Deletes a staff account by login.
    pub async fn delete_user(&self, login: &str) -> Result<(), Error> {
        let path = format!("/api/users/{}", urlencoding::encode(login));
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
