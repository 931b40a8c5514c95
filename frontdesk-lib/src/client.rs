//! Main FrontdeskClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use url::Url;

use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::error::Error;

/// The client for the front-desk controller API.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// use frontdesk_lib::{FrontdeskClient, auth::{SessionToken, StaticTokenProvider}};
///
/// let provider = StaticTokenProvider::new(SessionToken::new("jwt"));
/// let client = FrontdeskClient::builder()
///     .url("https://frontdesk.example.com")
///     .token_provider(provider)
///     .build()?;
///
/// let hotel = client.my_hotel().await?;
/// ```
#[derive(Clone)]
pub struct FrontdeskClient {
    inner: Arc<FrontdeskClientInner>,
}

struct FrontdeskClientInner {
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl FrontdeskClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> FrontdeskClientBuilder<Missing, Missing> {
        FrontdeskClientBuilder::new()
    }

    /// Returns the base URL of the controller API.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Builds an authenticated request for an API path.
    ///
    /// Applies the bearer token from the provider and the configured
    /// request timeout.
    pub(crate) async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = format!("{}{}", self.inner.base_url.trim_end_matches('/'), path);
        let token = self.inner.token_provider.session_token().await?;

        let mut request = self
            .inner
            .http_client
            .request(method, &url)
            .bearer_auth(&token.token);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        Ok(request)
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`FrontdeskClient`].
///
/// Uses the typestate pattern so the required fields are enforced at
/// compile time.
///
/// # Required Fields
///
/// - `url` - The controller API base URL
/// - `token_provider` - A [`TokenProvider`] implementation
pub struct FrontdeskClientBuilder<U, P> {
    url: U,
    token_provider: P,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl FrontdeskClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            token_provider: Missing,
            timeout: None,
            http_client: None,
        }
    }
}

impl Default for FrontdeskClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FrontdeskClientBuilder<Missing, P> {
    /// Sets the controller API base URL.
    pub fn url(self, url: impl Into<String>) -> FrontdeskClientBuilder<Set<String>, P> {
        FrontdeskClientBuilder {
            url: Set(url.into()),
            token_provider: self.token_provider,
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> FrontdeskClientBuilder<U, Missing> {
    /// Sets the token provider for authentication.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> FrontdeskClientBuilder<U, Set<Arc<dyn TokenProvider>>> {
        FrontdeskClientBuilder {
            url: self.url,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, P> FrontdeskClientBuilder<U, P> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client is created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl FrontdeskClientBuilder<Set<String>, Set<Arc<dyn TokenProvider>>> {
    /// Builds the [`FrontdeskClient`].
    ///
    /// Only available once both `url` and `token_provider` have been set.
    /// Fails with [`ApiError::InvalidUrl`] if the base URL does not parse.
    pub fn build(self) -> Result<FrontdeskClient, ApiError> {
        let base_url = self.url.0;
        Url::parse(&base_url).map_err(|_| ApiError::InvalidUrl(base_url.clone()))?;

        let http_client = self.http_client.unwrap_or_default();

        Ok(FrontdeskClient {
            inner: Arc::new(FrontdeskClientInner {
                base_url,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
