//! Outbound envelope serialized to WebSocket subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use guesthouse_core::events::BookingEvent;

/// Flattened change notification sent to dashboard clients as JSON text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeMessage {
    /// Event name: `booking_created` or `booking_status_changed`.
    pub event: String,
    /// The affected booking.
    pub booking_id: Uuid,
    /// The affected room.
    pub room_id: Uuid,
    /// New status, present for status changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the event was published.
    pub timestamp: DateTime<Utc>,
}

impl From<BookingEvent> for ChangeMessage {
    fn from(event: BookingEvent) -> Self {
        match event {
            BookingEvent::Created {
                booking_id,
                room_id,
                timestamp,
            } => Self {
                event: "booking_created".to_string(),
                booking_id,
                room_id,
                status: None,
                timestamp,
            },
            BookingEvent::StatusChanged {
                booking_id,
                room_id,
                status,
                timestamp,
            } => Self {
                event: "booking_status_changed".to_string(),
                booking_id,
                room_id,
                status: Some(status),
                timestamp,
            },
        }
    }
}
