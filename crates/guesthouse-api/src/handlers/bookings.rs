//! Booking submission handler.

use axum::Json;
use axum::extract::State;

use guesthouse_core::types::RoomId;
use guesthouse_service::booking::service::SubmitBooking;
use guesthouse_service::validation::GuestDetailsInput;

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::BookingCreatedResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/bookings
///
/// Validation failures come back as 400 with a `fields` map in the error
/// details; a date conflict is a 409. On success the guest gets the
/// stored booking plus its human-readable reference.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let booking = state
        .booking_service
        .submit(SubmitBooking {
            room_id: RoomId::from(req.room_id),
            details: GuestDetailsInput {
                guest_name: req.guest_name,
                guest_email: req.guest_email,
                guest_phone: req.guest_phone,
                special_requests: req.special_requests,
            },
            check_in: req.check_in,
            check_out: req.check_out,
            guests_count: req.guests_count,
        })
        .await?;

    let response = BookingCreatedResponse {
        reference: booking.reference(),
        booking,
    };

    Ok(Json(serde_json::json!({ "success": true, "data": response })))
}
