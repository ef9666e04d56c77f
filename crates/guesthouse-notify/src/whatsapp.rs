//! WhatsApp forwarder using a CallMeBot-style gateway.

use reqwest::Client;
use tracing::{info, warn};

use guesthouse_core::config::notify::WhatsAppConfig;
use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;
use guesthouse_entity::notification::BookingNotification;

/// Outcome of a WhatsApp delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsAppOutcome {
    /// The gateway accepted the message.
    Sent,
    /// Delivery was skipped; the reason explains which secret is absent.
    Skipped(String),
}

/// Forwards booking alerts to the owner's WhatsApp via an HTTP gateway.
#[derive(Debug, Clone)]
pub struct WhatsAppForwarder {
    /// Shared HTTP client.
    http: Client,
    /// Gateway settings; both secrets are optional.
    config: WhatsAppConfig,
}

impl WhatsAppForwarder {
    /// Create a new forwarder.
    pub fn new(config: WhatsAppConfig, http: Client) -> Self {
        Self { http, config }
    }

    /// Send a booking alert, or skip when configuration is absent.
    ///
    /// Skipping is the expected path on unconfigured deployments and is
    /// reported as success. Only a gateway-level failure is an error.
    pub async fn send(&self, payload: &BookingNotification) -> AppResult<WhatsAppOutcome> {
        payload.validate()?;

        let Some(owner_phone) = &self.config.owner_phone else {
            info!("Owner phone not configured - skipping WhatsApp notification");
            return Ok(WhatsAppOutcome::Skipped(
                "WhatsApp notification skipped - owner phone not configured".to_string(),
            ));
        };

        let message = format_message(payload);

        let Some(api_key) = &self.config.api_key else {
            info!(message = %message, "Gateway API key not configured - logging message instead");
            return Ok(WhatsAppOutcome::Skipped(
                "WhatsApp notification skipped - gateway API key not configured".to_string(),
            ));
        };

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("phone", owner_phone.as_str()),
                ("text", message.as_str()),
                ("apikey", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    guesthouse_core::error::ErrorKind::ExternalService,
                    format!("WhatsApp gateway request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "WhatsApp gateway rejected the message");
            return Err(AppError::external_service(format!(
                "WhatsApp gateway responded {status}"
            )));
        }

        info!(booking = %payload.reference(), "WhatsApp notification sent");
        Ok(WhatsAppOutcome::Sent)
    }
}

/// Format the owner-facing alert message.
fn format_message(payload: &BookingNotification) -> String {
    format!(
        "New booking at Casa Serena\n\n\
         Guest: {}\n\
         Phone: {}\n\
         Room: {}\n\
         Check-in: {}\n\
         Check-out: {}\n\
         Total: ${}\n\
         Ref: {}\n\n\
         Please confirm this booking in your admin dashboard.",
        payload.guest_name,
        payload.guest_phone,
        payload.room_name,
        payload.check_in,
        payload.check_out,
        payload.total_price,
        payload.reference(),
    )
}
