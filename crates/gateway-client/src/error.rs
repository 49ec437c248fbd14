//! Error types for gateway client operations

use thiserror::Error;

/// Result type alias for gateway client operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur while talking to a gateway.
///
/// Only transport-level problems are errors. A response with a non-2xx
/// status is still a [`crate::GatewayResponse`]; the gateway answers bad
/// requests with a readable error body that callers are expected to print.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// HTTP request failed (connection refused, DNS failure, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
