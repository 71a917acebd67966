//! Slide Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other Slide crates:
//! - Client configuration (base URL, bearer token, timeouts)
//! - The unified error type covering transport, API, decode and pagination failures
//! - Structured logging with tracing
//! - API constants (version prefix, resource paths)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ClientConfig, LoggingConfig, SlideConfig};
pub use error::{ApiErrorBody, SlideError, SlideResult};
pub use logging::{init_console_logging, init_logging, LogGuard};
