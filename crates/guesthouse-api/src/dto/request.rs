//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Booking submission body.
///
/// Field-level constraints (name/email/phone lengths) are applied by the
/// reservation validator in the service layer so that every violation
/// comes back in one field→message map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: Uuid,
    /// Guest full name.
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Guest phone / WhatsApp number.
    pub guest_phone: String,
    /// First occupied night (`YYYY-MM-DD`).
    pub check_in: NaiveDate,
    /// Departure date, exclusive (`YYYY-MM-DD`).
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests_count: i32,
    /// Optional free-text special request.
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Admin login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginRequest {
    /// Shared dashboard password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Status transition body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status: `confirmed` or `cancelled`.
    pub status: String,
}

/// Device token registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDeviceRequest {
    /// Provider-issued push token.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// Originating platform (`ios`, `android`, `web`).
    #[validate(length(min = 1, message = "Device type is required"))]
    pub device_type: String,
}

/// Date window for the availability calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    /// First date of the window (inclusive).
    pub from: NaiveDate,
    /// Last date of the window (inclusive).
    pub to: NaiveDate,
}

/// Optional status filter for the admin booking list.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBookingsQuery {
    /// One of `all`, `pending`, `confirmed`, `cancelled`.
    #[serde(default)]
    pub status: Option<String>,
}

/// WebSocket authentication query.
#[derive(Debug, Clone, Deserialize)]
pub struct WsQuery {
    /// Admin session token.
    pub token: String,
}
