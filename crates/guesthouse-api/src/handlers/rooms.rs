//! Room listing and availability handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use uuid::Uuid;

use guesthouse_core::error::AppError;
use guesthouse_core::types::RoomId;
use guesthouse_service::availability;
use guesthouse_store::traits::{BookingStore, RoomStore};

use crate::dto::request::AvailabilityQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rooms = state.store.list_rooms().await?;
    Ok(Json(serde_json::json!({ "success": true, "data": rooms })))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let room = state
        .store
        .get_room(RoomId::from(id))
        .await?
        .ok_or_else(|| AppError::not_found("Room not found"))?;
    Ok(Json(serde_json::json!({ "success": true, "data": room })))
}

/// GET /api/rooms/{id}/availability?from=&to=
///
/// Recomputed from the store's current reservation list on every call;
/// nothing is cached because another guest can book concurrently.
pub async fn room_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if query.to < query.from {
        return Err(AppError::validation("'to' must not be before 'from'").into());
    }

    let room_id = RoomId::from(id);
    state
        .store
        .get_room(room_id)
        .await?
        .ok_or_else(|| AppError::not_found("Room not found"))?;

    let bookings = state.store.bookings_for_room(room_id).await?;
    let today = Utc::now().date_naive();
    let view = availability::calendar(room_id, query.from, query.to, today, &bookings);

    Ok(Json(serde_json::json!({ "success": true, "data": view })))
}
