//! Client for the Slide REST API.
//!
//! `SlideClient` binds an immutable `ClientConfig` (origin, bearer token,
//! timeouts) to a `Transport`. It is cheap to clone and safe to share across
//! tasks; every call builds its own request and reads its own response.

use std::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use slide_core::config::ClientConfig;
use slide_core::error::SlideResult;

use crate::request::RequestBuilder;
use crate::response::{self, RawResponse};
use crate::transport::{ReqwestTransport, Transport};

/// HTTP client for the Slide API.
#[derive(Clone)]
pub struct SlideClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl SlideClient {
    /// Create a client that talks to the network through reqwest.
    pub fn new(config: ClientConfig) -> SlideResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    /// Create a client that executes requests through a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> SlideResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the API origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build and execute a request, returning the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> SlideResult<RawResponse> {
        let request = request.build(&self.config)?;
        debug!("{} {}", request.method(), request.path());
        self.transport.execute(request).await
    }

    /// Execute a request and decode the body of an `expected` response.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> SlideResult<T> {
        let response = self.execute(request).await?;
        response::decode(&response, expected)
    }

    /// Execute a request whose success response carries no body.
    pub async fn send(&self, request: RequestBuilder, expected: StatusCode) -> SlideResult<()> {
        let response = self.execute(request).await?;
        response::expect_status(&response, expected)
    }
}

impl fmt::Debug for SlideClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
