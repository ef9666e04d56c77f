//! FCM push forwarder with per-device fan-out and stale-token cleanup.

use std::sync::Arc;

use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use guesthouse_core::config::notify::PushConfig;
use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;
use guesthouse_entity::notification::BookingNotification;
use guesthouse_store::traits::DeviceTokenStore;

/// Outcome of a push fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Delivery skipped because the FCM server key is absent.
    Skipped(String),
    /// No device tokens are registered; nothing to do.
    NoDevices,
    /// Fan-out completed; partial failure across tokens is tolerated.
    Delivered {
        /// Number of devices that accepted the message.
        sent: usize,
        /// Number of devices attempted.
        total: usize,
    },
}

/// FCM response body for a single-token send.
#[derive(Debug, Default, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    failure: i64,
    #[serde(default)]
    results: Vec<FcmResult>,
}

/// Per-message result inside an FCM response.
#[derive(Debug, Deserialize)]
struct FcmResult {
    #[serde(default)]
    error: Option<String>,
}

/// Whether the provider reported the token as gone for good.
fn token_no_longer_registered(response: &FcmResponse) -> bool {
    response.failure == 1
        && response
            .results
            .first()
            .and_then(|r| r.error.as_deref())
            .is_some_and(|e| e == "NotRegistered")
}

/// Forwards booking alerts to every registered admin device.
#[derive(Clone)]
pub struct PushForwarder {
    /// Shared HTTP client.
    http: Client,
    /// Push gateway settings.
    config: PushConfig,
    /// Device token table in the external store.
    devices: Arc<dyn DeviceTokenStore>,
}

impl PushForwarder {
    /// Create a new forwarder.
    pub fn new(config: PushConfig, http: Client, devices: Arc<dyn DeviceTokenStore>) -> Self {
        Self {
            http,
            config,
            devices,
        }
    }

    /// Fan a booking alert out to all registered devices.
    ///
    /// A token the provider reports as `NotRegistered` is deleted from the
    /// store so later fan-outs skip it. Per-token failures are logged and
    /// tolerated; only a token-listing failure is a hard error.
    pub async fn send(&self, payload: &BookingNotification) -> AppResult<PushOutcome> {
        payload.validate()?;

        let tokens = self.devices.list_tokens().await?;
        if tokens.is_empty() {
            info!("No device tokens registered");
            return Ok(PushOutcome::NoDevices);
        }

        let Some(server_key) = &self.config.server_key else {
            info!("FCM server key not configured - skipping push notifications");
            return Ok(PushOutcome::Skipped("FCM not configured".to_string()));
        };

        let body = format!(
            "{} booked {} ({} - {}) - ${}",
            payload.guest_name,
            payload.room_name,
            payload.check_in,
            payload.check_out,
            payload.total_price
        );

        let sends = tokens.iter().map(|device| {
            let token = device.token.clone();
            let body = body.clone();
            async move {
                let delivered = self
                    .send_to_token(server_key, &token, &body, payload)
                    .await;
                (token, delivered)
            }
        });

        let results = join_all(sends).await;
        let total = results.len();
        let sent = results.iter().filter(|(_, delivered)| *delivered).count();

        info!(sent, total, "Push notifications dispatched");
        Ok(PushOutcome::Delivered { sent, total })
    }

    /// Send to one device. Returns whether the device accepted the message.
    async fn send_to_token(
        &self,
        server_key: &str,
        token: &str,
        body: &str,
        payload: &BookingNotification,
    ) -> bool {
        let request = serde_json::json!({
            "to": token,
            "notification": {
                "title": "New Booking",
                "body": body,
                "sound": "default",
                "badge": "1",
            },
            "data": {
                "booking_id": payload.booking_id,
                "type": "new_booking",
                "click_action": "OPEN_ADMIN",
            },
        });

        let response = match self
            .http
            .post(&self.config.endpoint)
            .header("Authorization", format!("key={server_key}"))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(token = %truncate(token), error = %e, "Push send failed");
                return false;
            }
        };

        let fcm: FcmResponse = match response.json().await {
            Ok(fcm) => fcm,
            Err(e) => {
                warn!(token = %truncate(token), error = %e, "Unreadable FCM response");
                return false;
            }
        };

        if token_no_longer_registered(&fcm) {
            info!(token = %truncate(token), "Removing stale device token");
            if let Err(e) = self.devices.remove_token(token).await {
                warn!(token = %truncate(token), error = %e, "Failed to remove stale token");
            }
            return false;
        }

        fcm.failure == 0
    }
}

impl std::fmt::Debug for PushForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushForwarder")
            .field("endpoint", &self.config.endpoint)
            .finish_non_exhaustive()
    }
}

/// First 20 characters of a token, for logs.
fn truncate(token: &str) -> &str {
    &token[..token.len().min(20)]
}
