//! Admin dashboard configuration.

use serde::{Deserialize, Serialize};

/// Dashboard access settings.
///
/// The dashboard is gated by a single shared password exchanged for a
/// short-lived session token. This is an explicit configuration input,
/// not an ambient constant, and is acknowledged as a stop-gap rather
/// than real authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared dashboard password.
    pub dashboard_password: String,
    /// Session token lifetime in minutes.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
}

fn default_session_ttl() -> u64 {
    720
}
