//! Error types for the Travis API client

use thiserror::Error;

/// Errors that can occur when talking to a Travis CI endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Failed to parse response as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// API answered with a non-success status code
    #[error("API error (HTTP {status}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Base URL and path could not be joined into a valid URL
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
