//! Device token registration handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use guesthouse_core::error::AppError;
use guesthouse_entity::device::RegisterDeviceToken;
use guesthouse_store::traits::DeviceTokenStore;

use crate::dto::request::RegisterDeviceRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/devices
///
/// Upsert keyed by the token value: re-registering an existing token
/// updates its device type instead of duplicating it.
pub async fn register_device(
    State(state): State<AppState>,
    Json(req): Json<RegisterDeviceRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid registration: {e}")))?;

    let token = state
        .store
        .register_token(&RegisterDeviceToken {
            token: req.token,
            device_type: req.device_type,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": token })))
}
