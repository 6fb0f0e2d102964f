/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Error type shared by every layer of the client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the Google Sheets and Drive APIs
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure (connection, TLS, timeout, body decoding)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem failure (client secrets, token cache, loopback listener)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The API rejected the credentials
    #[error("unauthorized")]
    Unauthorized,
    /// The access token is no longer accepted and must be refreshed
    #[error("access token expired")]
    AccessTokenExpired,
    /// The requested resource does not exist
    #[error("not found")]
    NotFound,
    /// The API kept answering with a quota error after all retries
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    /// Non-success status without a decodable error body
    #[error("unexpected http status: {0}")]
    Unexpected(StatusCode),
    /// Error envelope returned by a Google API
    #[error("api error {code} ({status}): {message}")]
    Api {
        /// HTTP status code echoed in the envelope
        code: u16,
        /// Canonical status name, e.g. `INVALID_ARGUMENT`
        status: String,
        /// Human readable message
        message: String,
    },
    /// Failure during the OAuth authorization or token exchange
    #[error("oauth error: {0}")]
    OAuth(String),
    /// Caller supplied an argument the API cannot accept
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A payload could not be serialized
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// A payload did not have the expected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),
}
