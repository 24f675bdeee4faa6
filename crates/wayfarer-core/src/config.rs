//! Configuration management for the Wayfarer client crates.
//!
//! All configuration is driven by `WAYFARER_*` environment variables with
//! defaults pointing at the production API.

use crate::types::AccessToken;

/// Base URL for all API calls, not hardcoded to enable testing.
pub const BASE_API_URL: &str = "https://api.wayfarer.dev";

/// Default account the directions engine runs on.
pub const DEFAULT_USER: &str = "wayfarer";

/// Global configuration for Wayfarer clients.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WayfarerConfig {
    /// Base URL used as the API endpoint.
    pub base_url: String,
    /// Account the directions engine runs on.
    pub user: String,
    /// Access token attached to every request, if configured.
    pub access_token: Option<AccessToken>,
    /// Log level.
    pub log_level: String,
}

impl Default for WayfarerConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_API_URL.to_owned(),
            user: DEFAULT_USER.to_owned(),
            access_token: None,
            log_level: "info".to_owned(),
        }
    }
}

impl WayfarerConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("WAYFARER_BASE_URL") {
            config.base_url = v;
        }
        if let Ok(v) = std::env::var("WAYFARER_USER") {
            config.user = v;
        }
        if let Ok(v) = std::env::var("WAYFARER_ACCESS_TOKEN") {
            config.access_token = AccessToken::new(v).ok();
        }
        if let Ok(v) = std::env::var("WAYFARER_LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
