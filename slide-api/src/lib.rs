//! Slide API - HTTP client for the Slide backup REST API.
//!
//! This crate provides a typed client for the agent, backup and file restore
//! resources. Requests are described as plain data (`ApiRequest`) and executed
//! through a swappable `Transport`; listings are driven page by page by the
//! `Paginator`, which hands every decoded page to a caller-supplied consumer.

pub mod client;
pub mod endpoints;
pub mod paginate;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod test_support;

// Re-export key types
pub use client::SlideClient;
pub use endpoints::{Agents, Backups, FileRestores};
pub use paginate::Paginator;
pub use request::{ApiRequest, RequestBuilder};
pub use response::{ListResponse, Pagination, RawResponse};
pub use transport::{ReqwestTransport, Transport};

pub use reqwest::{Method, StatusCode};
pub use slide_core::{ClientConfig, SlideError, SlideResult};
pub use slide_models as models;
pub use tokio_util::sync::CancellationToken;
