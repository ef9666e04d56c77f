//! Admin dashboard handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use guesthouse_core::error::AppError;
use guesthouse_core::types::BookingId;
use guesthouse_entity::booking::BookingStatus;
use guesthouse_service::admin::service::StatusFilter;

use crate::dto::request::{AdminLoginRequest, ListBookingsQuery, UpdateStatusRequest};
use crate::error::ApiError;
use crate::extractors::admin::AdminToken;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid login request: {e}")))?;

    let token = state.admin_service.login(&req.password)?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "token": token } }),
    ))
}

/// POST /api/admin/logout
pub async fn logout(
    State(state): State<AppState>,
    token: AdminToken,
) -> Json<serde_json::Value> {
    state.admin_service.logout(&token.0);
    Json(serde_json::json!({ "success": true, "data": { "message": "Logged out" } }))
}

/// GET /api/admin/bookings?status=
pub async fn list_bookings(
    State(state): State<AppState>,
    _token: AdminToken,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let filter = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(s) => s.parse()?,
    };

    let bookings = state.admin_service.list(filter).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": bookings })))
}

/// PUT /api/admin/bookings/{id}/status
///
/// Responds with the updated booking plus a fresh fetch of the whole
/// list, so dashboards rebuild their aggregates instead of patching
/// local state.
pub async fn update_status(
    State(state): State<AppState>,
    _token: AdminToken,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status: BookingStatus = req.status.parse()?;

    let booking = state
        .admin_service
        .set_status(BookingId::from(id), status)
        .await?;
    let bookings = state.admin_service.list(StatusFilter::All).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "booking": booking, "bookings": bookings },
    })))
}

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _token: AdminToken,
) -> Result<Json<serde_json::Value>, ApiError> {
    let today = Utc::now().date_naive();
    let stats = state.admin_service.dashboard(today).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": stats })))
}
