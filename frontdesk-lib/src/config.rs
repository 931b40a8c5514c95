//! Startup configuration document

use serde::Deserialize;

use crate::error::ApiError;

/// Deployment configuration fetched once at application startup.
///
/// Every field is optional; a missing field leaves the corresponding UI
/// default blank rather than failing the load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// URL of the logo shown in the application header.
    pub logo_url: Option<String>,
    /// Base URL of the controller API.
    pub controller_api_url: Option<String>,
    /// Externally reachable controller URL, used for links shown to
    /// guests.
    pub controller_external_api_url: Option<String>,
    /// Application title.
    pub title: Option<String>,
    /// Deployed application version.
    pub version: Option<String>,
}

impl AppConfig {
    /// Parses a configuration document from JSON text.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body)
            .map_err(|err| ApiError::parse_with_body(err.to_string(), body))
    }

    /// Fetches the configuration document from the given URL.
    pub async fn fetch(http: &reqwest::Client, url: &str) -> Result<Self, ApiError> {
        let response = http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::http(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }
        let body = response.text().await?;
        Self::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_json(
            r#"{"controllerApiUrl": "https://api.example.com", "title": "Front Desk"}"#,
        )
        .unwrap();
        assert_eq!(
            config.controller_api_url.as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(config.title.as_deref(), Some("Front Desk"));
        assert!(config.logo_url.is_none());
        assert!(config.version.is_none());
    }

    #[test]
    fn test_empty_document() {
        let config = AppConfig::from_json("{}").unwrap();
        assert!(config.controller_api_url.is_none());
    }

    #[test]
    fn test_invalid_document() {
        assert!(AppConfig::from_json("not json").is_err());
    }
}
