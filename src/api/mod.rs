//! API client for the Travis CI v2 API.
//!
//! Two instances (travis-ci.com and travis-ci.org) speak the same protocol;
//! every request names the [`Endpoint`] it targets.

mod client;
mod endpoint;
mod error;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::{ApiClient, ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use endpoint::Endpoint;
pub use error::ApiError;

use async_trait::async_trait;
use serde_json::Value;

/// JSON-over-HTTP access to one endpoint at a time.
///
/// Implemented by [`ApiClient`]; the restart service only depends on this
/// trait so tests can substitute a recording transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET base_url(endpoint) + path`, decoded as JSON
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<Value, ApiError>;

    /// `POST base_url(endpoint) + path` with an optional JSON body
    async fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError>;

    /// Attach `token` to all subsequent requests for `endpoint`
    fn set_credential(&mut self, endpoint: Endpoint, token: String);
}
