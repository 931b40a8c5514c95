//! Check-in credential resource and PMS forwarding

use reqwest::Method;
use uuid::Uuid;

use super::check_status;
use super::read_json;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::CheckInCredential;
use crate::model::PmsData;
use crate::FrontdeskClient;

impl FrontdeskClient {
    /// Retrieves the credentials scanned at the given desk, newest first.
    pub async fn credentials_for_desk(
        &self,
        desk_id: &str,
    ) -> Result<Vec<CheckInCredential>, Error> {
        let path = format!(
            "/api/checkin-credentials?deskId={}",
            urlencoding::encode(desk_id)
        );
        let response = self
            .request(Method::GET, &path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Retrieves a single credential by id.
    pub async fn credential(&self, id: Uuid) -> Result<CheckInCredential, Error> {
        let path = format!("/api/checkin-credentials/{id}");
        let response = self
            .request(Method::GET, &path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        read_json(check_status(response).await?).await
    }

    /// Forwards a verified credential/booking pair to the
    /// property-management system.
    pub async fn send_to_pms(&self, data: &PmsData) -> Result<(), Error> {
        let response = self
            .request(Method::POST, "/api/hotel-integration/pms-data")
            .await?
            .json(data)
            .send()
            .await
            .map_err(ApiError::from)?;
        check_status(response).await?;
        Ok(())
    }
}
