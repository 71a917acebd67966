//! Global error types for the Slide API client.
//!
//! All error categories across the client are unified into a single
//! `SlideError` enum with conversions from underlying library errors.
//! Transport failures, server-reported API errors, decode failures and
//! caller-initiated cancellation are kept as distinct variants so callers can
//! match on the failure mode.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience type alias for Results using SlideError.
pub type SlideResult<T> = Result<T, SlideError>;

/// Error payload returned by the Slide API on non-success responses.
///
/// ```json
/// { "codes": ["ERR_NOT_FOUND"], "details": ["agent not found"], "message": "Not Found" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error codes.
    #[serde(default)]
    pub codes: Vec<String>,
    /// Additional human-readable details.
    #[serde(default)]
    pub details: Vec<String>,
    /// Summary message.
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    /// Decode an error body, falling back to the raw text as the message when
    /// the server did not send the structured error format.
    pub fn from_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => parsed,
            Err(_) => Self {
                message: String::from_utf8_lossy(body).trim().to_string(),
                ..Self::default()
            },
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.codes.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} [{}]", self.message, self.codes.join(", "))
        }
    }
}

/// Unified error type covering all error categories in the Slide client.
#[derive(Error, Debug)]
pub enum SlideError {
    // -- Configuration errors --
    /// Invalid client or logging configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// A caller-supplied argument cannot form a valid request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Network errors --
    /// The HTTP collaborator failed to complete the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- API errors --
    /// The server answered with a status other than the one the operation expects.
    #[error("api error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Decoded error payload.
        body: ApiErrorBody,
    },

    /// A success response body could not be decoded into the expected type.
    #[error("decode error: {0}")]
    Decode(String),

    /// A request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Pagination --
    /// The server broke the pagination contract (e.g. a non-increasing offset).
    #[error("pagination protocol violation: {0}")]
    Protocol(String),

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Generic --
    /// Wrapping anyhow errors, e.g. an abort raised by a page consumer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideError {
    /// HTTP status carried by an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SlideError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether this error came from caller-initiated cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SlideError::Cancelled)
    }
}

impl From<toml::de::Error> for SlideError {
    fn from(e: toml::de::Error) -> Self {
        SlideError::Config(e.to_string())
    }
}
