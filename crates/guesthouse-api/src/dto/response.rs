//! Response DTOs.

use serde::{Deserialize, Serialize};

use guesthouse_entity::booking::Booking;

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service is up.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Body returned after a successful booking submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    /// Human-readable booking reference shown to the guest.
    pub reference: String,
    /// The created booking record.
    pub booking: Booking,
}
