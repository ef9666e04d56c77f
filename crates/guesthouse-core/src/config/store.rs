//! External data store client configuration.

use serde::{Deserialize, Serialize};

/// Settings for the managed backend that owns rooms, bookings, and
/// device tokens. This service is only ever a client of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Provider selection: `"rest"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the store's REST endpoint (rest provider only).
    #[serde(default)]
    pub base_url: String,
    /// Public API key sent on every request.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Service-role key used as the bearer token for writes.
    #[serde(default)]
    pub service_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: String::new(),
            api_key: None,
            service_key: None,
            request_timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_timeout() -> u64 {
    10
}
