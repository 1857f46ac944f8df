use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use super::endpoint::{Credentials, Endpoint};
use super::error::ApiError;
use super::Transport;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Media type requested from the Travis v2 API
pub const ACCEPT_HEADER: &str = "application/vnd.travis-ci.2+json";

/// Default CLI version (from Cargo.toml)
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the User-Agent string
fn build_user_agent() -> String {
    format!("travis-restart/{}", DEFAULT_VERSION)
}

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub pro_base_url: String,
    pub public_base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pro_base_url: Endpoint::Pro.default_base_url().to_string(),
            public_base_url: Endpoint::Public.default_base_url().to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for both Travis CI endpoints
///
/// Every call names its endpoint explicitly; the client never fans out to
/// both instances on its own.
pub struct ApiClient {
    client: Client,
    user_agent: String,
    pro_base_url: String,
    public_base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            user_agent: build_user_agent(),
            pro_base_url: config.pro_base_url,
            public_base_url: config.public_base_url,
            credentials: Credentials::default(),
        })
    }

    fn base_url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Pro => &self.pro_base_url,
            Endpoint::Public => &self.public_base_url,
        }
    }

    /// `base_url + path`, keeping any path prefix on the base URL.
    fn build_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        Url::parse(&url).map_err(|source| ApiError::InvalidUrl { url, source })
    }

    async fn send(
        &self,
        method: Method,
        endpoint: Endpoint,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = Self::build_url(self.base_url(endpoint), path)?;

        debug!("=== API Request ===");
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url.clone())
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", &self.user_agent);

        if let Some(authorization) = self.credentials.authorization_header(endpoint) {
            request = request.header("Authorization", authorization);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("=== API Response ===");
        debug!("Status: {}", status);

        let response_text = response.text().await?;

        if !status.is_success() {
            error!("{} returned HTTP {}", url, status.as_u16());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        decode_body(&response_text)
    }
}

/// Parse a response body, treating an empty body as JSON `null`.
pub(super) fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, endpoint, path, None).await
    }

    async fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.send(Method::POST, endpoint, path, body).await
    }

    fn set_credential(&mut self, endpoint: Endpoint, token: String) {
        self.credentials.set(endpoint, token);
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("pro_base_url", &self.pro_base_url)
            .field("public_base_url", &self.public_base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}
