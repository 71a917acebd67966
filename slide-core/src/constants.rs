//! API-wide constants.

/// Client name.
pub const APP_NAME: &str = "slide-rs";

/// Client version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API version prefix.
pub const API_VERSION: &str = "v1";

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.slide.tech";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;

/// Query parameter carrying the pagination cursor.
pub const OFFSET_PARAM: &str = "offset";

/// Default `User-Agent` header value.
pub fn default_user_agent() -> String {
    format!("{APP_NAME}/{APP_VERSION}")
}

/// Resource paths relative to the API origin.
pub mod paths {
    pub const AGENT: &str = "/v1/agent";
    pub const BACKUP: &str = "/v1/backup";
    pub const FILE_RESTORE: &str = "/v1/restore/file";

    /// Sub-resource of a file restore used to list its contents.
    pub const BROWSE: &str = "browse";
}
