/*
[INPUT]:  Error sources (transport, upstream error envelopes, decoding, config)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Changelly client
#[derive(Error, Debug)]
pub enum ChangellyError {
    /// HTTP request failed (DNS, connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an `error` member
    #[error("{message}")]
    Upstream { code: i64, message: String },

    /// Body is not a JSON-RPC response the client understands
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Non-2xx status with a body that is not a JSON-RPC envelope
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A decimal amount could not be parsed
    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChangellyError {
    /// Check if the service itself rejected the call
    pub fn is_upstream(&self) -> bool {
        matches!(self, ChangellyError::Upstream { .. })
    }

    /// Error code sent by the service, if any
    pub fn upstream_code(&self) -> Option<i64> {
        match self {
            ChangellyError::Upstream { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if the request never produced a usable response
    pub fn is_transport(&self) -> bool {
        matches!(self, ChangellyError::Http(_))
    }

    pub(crate) fn unexpected_status(status: StatusCode, body: &[u8]) -> Self {
        ChangellyError::UnexpectedStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

/// Result type alias for Changelly operations
pub type Result<T> = std::result::Result<T, ChangellyError>;
