//! Booking-related domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted when the reservation list changes.
///
/// Admin dashboards subscribe to these and refetch the full list rather
/// than patching their local copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BookingEvent {
    /// A new booking was created (always with status `pending`).
    Created {
        /// The booking ID.
        booking_id: Uuid,
        /// The room the booking is for.
        room_id: Uuid,
        /// When the event was published.
        timestamp: DateTime<Utc>,
    },
    /// A booking's status was changed by the admin flow.
    StatusChanged {
        /// The booking ID.
        booking_id: Uuid,
        /// The room the booking is for.
        room_id: Uuid,
        /// The new status (`pending`, `confirmed`, `cancelled`).
        status: String,
        /// When the event was published.
        timestamp: DateTime<Utc>,
    },
}

impl BookingEvent {
    /// The booking this event concerns.
    pub fn booking_id(&self) -> Uuid {
        match self {
            Self::Created { booking_id, .. } | Self::StatusChanged { booking_id, .. } => {
                *booking_id
            }
        }
    }
}
