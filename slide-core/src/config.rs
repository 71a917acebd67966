//! Client configuration management.
//!
//! Handles loading, saving, and validating the configuration a `SlideClient`
//! is built from: API origin, bearer token, timeouts, and logging settings.
//! Configuration is persisted as TOML on disk and is immutable once a client
//! has been constructed from it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{SlideError, SlideResult};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideConfig {
    /// API client settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API client configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API origin (e.g., "https://api.slide.tech").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Value of the `User-Agent` header.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, logs go to the console only.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    constants::DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_ms: default_timeout(),
            connect_timeout_ms: default_connect_timeout(),
            user_agent: constants::default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

// The token never shows up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration for the production API with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Override the API origin (e.g. for a staging server or a local mock).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Self::sanitize_base_url(base_url);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Check the configuration before a client is built from it.
    pub fn validate(&self) -> SlideResult<()> {
        if self.token.trim().is_empty() {
            return Err(SlideError::MissingConfig("client.token".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(SlideError::MissingConfig("client.base_url".into()));
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| SlideError::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SlideError::Config(format!(
                "base_url must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if parsed.cannot_be_a_base() {
            return Err(SlideError::Config(format!(
                "base_url {:?} cannot carry a path",
                self.base_url
            )));
        }

        if self.timeout_ms == 0 {
            return Err(SlideError::Config("client.timeout_ms must be non-zero".into()));
        }
        if self.connect_timeout_ms == 0 {
            return Err(SlideError::Config(
                "client.connect_timeout_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Sanitize and normalize an API origin.
    ///
    /// Adds `https://` when the address carries no scheme at all, and strips
    /// surrounding quotes/whitespace and trailing slashes. An explicit
    /// non-http scheme is kept as-is so [`ClientConfig::validate`] rejects it.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

impl SlideConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> SlideResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> SlideResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: SlideConfig = toml::from_str(&contents)?;
        config.client.base_url = ClientConfig::sanitize_base_url(&config.client.base_url);
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> SlideResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SlideError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// - Linux: `~/.config/slide/config.toml`
    /// - macOS: `~/Library/Application Support/slide/config.toml`
    /// - Windows: `%APPDATA%/slide/config.toml`
    pub fn default_config_path() -> SlideResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| SlideError::Config("could not determine config directory".into()))?;
        Ok(base.join("slide").join("config.toml"))
    }
}
