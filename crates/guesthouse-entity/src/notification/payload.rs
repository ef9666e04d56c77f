//! The booking notification payload.
//!
//! This is the explicit schema for the body both notification webhooks
//! receive. It is deserialized and validated at the boundary; a malformed
//! payload is rejected with a typed error before any field is used.

use serde::{Deserialize, Serialize};

use guesthouse_core::error::AppError;

use crate::booking::model::reference_from_id;

/// Fixed-shape payload describing a newly created booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingNotification {
    /// The created booking's identifier.
    pub booking_id: String,
    /// Guest full name.
    pub guest_name: String,
    /// Guest phone / WhatsApp number.
    pub guest_phone: String,
    /// Display name of the booked room.
    pub room_name: String,
    /// Check-in date, already formatted for display.
    pub check_in: String,
    /// Check-out date, already formatted for display.
    pub check_out: String,
    /// Total price in whole currency units.
    pub total_price: i64,
}

impl BookingNotification {
    /// Validate the payload before any forwarder uses it.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.booking_id.trim().is_empty() {
            missing.push("booking_id");
        }
        if self.guest_name.trim().is_empty() {
            missing.push("guest_name");
        }
        if self.room_name.trim().is_empty() {
            missing.push("room_name");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Notification payload missing fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Human-readable booking reference.
    pub fn reference(&self) -> String {
        reference_from_id(&self.booking_id)
    }
}
