//! Device token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device registered to receive push notifications for new bookings.
///
/// Keyed by the token itself; registration is an upsert and a token is
/// deleted once the push provider reports it as no longer registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceToken {
    /// Provider-issued push token.
    pub token: String,
    /// Originating platform (`ios`, `android`, `web`).
    pub device_type: String,
    /// When the token was first registered.
    pub created_at: DateTime<Utc>,
}

/// Registration request for a device token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDeviceToken {
    /// Provider-issued push token.
    pub token: String,
    /// Originating platform.
    pub device_type: String,
}
