//! Request execution.
//!
//! `Transport` has one capability: execute a request descriptor and return
//! the raw response. The production implementation is `ReqwestTransport`;
//! tests inject their own implementation through
//! `SlideClient::with_transport`. Transports never retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use slide_core::config::ClientConfig;
use slide_core::error::{SlideError, SlideResult};

use crate::request::ApiRequest;
use crate::response::RawResponse;

/// Executes one HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> SlideResult<RawResponse>;
}

/// `Transport` backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build the underlying client with the configured timeouts.
    pub fn new(config: &ClientConfig) -> SlideResult<Self> {
        let inner = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| SlideError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> SlideResult<RawResponse> {
        let url = request.url()?;

        let mut builder = self.inner.request(request.method().clone(), url);
        for (key, value) in request.headers() {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(classify_error)?.to_vec();

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method(),
            request.path(),
            status,
            body.len()
        );
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Classify a reqwest error into a SlideError variant.
fn classify_error(e: reqwest::Error) -> SlideError {
    if e.is_timeout() {
        SlideError::Timeout(e.to_string())
    } else if e.is_connect() {
        SlideError::Transport(format!("connection failed: {e}"))
    } else {
        SlideError::Transport(e.to_string())
    }
}
