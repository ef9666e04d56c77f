//! Change-feed configuration.

use serde::{Deserialize, Serialize};

/// Settings for the booking change feed that keeps admin dashboards
/// in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Broadcast channel capacity. Lagged subscribers miss events and
    /// are expected to refetch on reconnect.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    256
}
