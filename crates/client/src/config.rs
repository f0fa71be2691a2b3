//! Client configuration.
//!
//! Constructed explicitly by the embedding program and passed into
//! [`DashboardApi::new`](crate::api::DashboardApi::new); library code
//! never reads the environment or any other ambient source.

/// Connection settings for the dashboard backend.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the backend, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Static credential sent verbatim in the `authorization` header
    /// of every request.
    pub auth_token: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    /// Default request timeout applied by [`DashboardConfig::new`].
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Build a config with the default request timeout.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            request_timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}
