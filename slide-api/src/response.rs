//! Response types and decoding.
//!
//! Every operation expects exactly one success status (200, 201, 202 or 204).
//! A response carrying that status is decoded into the operation's type; any
//! other status is decoded as the API error payload and returned as
//! `SlideError::Api`, never as the success type.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use slide_core::error::{ApiErrorBody, SlideError, SlideResult};

/// Raw HTTP response as returned by a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// A response without a body, e.g. 202 Accepted or 204 No Content.
    pub fn empty(status: u16) -> Self {
        Self::new(status, Vec::new())
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Envelope of every listing endpoint.
///
/// ```json
/// { "pagination": { "total": 2, "next_offset": 1 }, "data": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Pagination info for this page.
    #[serde(default)]
    pub pagination: Pagination,
    /// Items of this page, in server order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Pagination metadata of a listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of items across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Offset of the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u64>,
}

/// Decode a response whose success status is `expected`.
pub fn decode<T: DeserializeOwned>(response: &RawResponse, expected: StatusCode) -> SlideResult<T> {
    check_status(response, expected)?;
    serde_json::from_slice(&response.body).map_err(|e| {
        SlideError::Decode(format!(
            "failed to decode {} response: {e}",
            response.status
        ))
    })
}

/// Accept a response whose success status is `expected`, ignoring its body.
pub fn expect_status(response: &RawResponse, expected: StatusCode) -> SlideResult<()> {
    check_status(response, expected)
}

/// Convert any status other than `expected` into an API error.
fn check_status(response: &RawResponse, expected: StatusCode) -> SlideResult<()> {
    if response.status == expected.as_u16() {
        return Ok(());
    }

    let body = ApiErrorBody::from_bytes(&response.body);
    warn!(
        "server returned {} (expected {}): {}",
        response.status,
        expected.as_u16(),
        body
    );
    Err(SlideError::Api {
        status: response.status,
        body,
    })
}
