//! Notification webhook handlers.
//!
//! Stateless: each request formats a payload and makes the third-party
//! call(s) directly. Absent configuration is an expected condition and is
//! answered with 200; only a gateway-level failure produces a 500.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::error;

use guesthouse_core::types::response::WebhookResponse;
use guesthouse_entity::notification::BookingNotification;
use guesthouse_notify::push::PushOutcome;
use guesthouse_notify::whatsapp::WhatsAppOutcome;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/hooks/notify-booking
pub async fn notify_booking(
    State(state): State<AppState>,
    Json(payload): Json<BookingNotification>,
) -> Result<(StatusCode, Json<WebhookResponse>), ApiError> {
    // Reject malformed payloads before any outbound call.
    payload.validate()?;

    match state.whatsapp.send(&payload).await {
        Ok(WhatsAppOutcome::Sent) => Ok((
            StatusCode::OK,
            Json(WebhookResponse::ok("Notification sent")),
        )),
        Ok(WhatsAppOutcome::Skipped(reason)) => {
            Ok((StatusCode::OK, Json(WebhookResponse::ok(reason))))
        }
        Err(e) => {
            error!(error = %e, "WhatsApp notification failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WebhookResponse::hard_failure(
                    "Failed to send WhatsApp notification",
                )),
            ))
        }
    }
}

/// POST /api/hooks/push
pub async fn push_notification(
    State(state): State<AppState>,
    Json(payload): Json<BookingNotification>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    payload.validate()?;

    match state.push.send(&payload).await {
        Ok(PushOutcome::NoDevices) => Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "message": "No devices to notify" })),
        )),
        Ok(PushOutcome::Skipped(reason)) => Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "success": false, "message": reason })),
        )),
        Ok(PushOutcome::Delivered { sent, total }) => Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "sent": sent, "total": total })),
        )),
        Err(e) => {
            error!(error = %e, "Push notification failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "success": false, "error": e.message })),
            ))
        }
    }
}
