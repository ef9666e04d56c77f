//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use guesthouse_core::types::{BookingId, RoomId};

use super::status::BookingStatus;

/// A guest's claim on a room for a date range.
///
/// The check-out date is exclusive: a booking occupies every night in
/// `[check_in, check_out)`, so the check-out day itself is free for a
/// new check-in (same-day turnover).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Identifier assigned by the store on creation.
    pub id: BookingId,
    /// The booked room.
    pub room_id: RoomId,
    /// Guest full name.
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Guest phone / WhatsApp number.
    pub guest_phone: String,
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Number of guests staying.
    pub guests_count: i32,
    /// Optional free-text special request.
    pub special_requests: Option<String>,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Price locked in at submit time: nights × nightly price.
    pub total_price: i64,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Number of nights: check-out minus check-in in whole days.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether this booking occupies the given date, ignoring status.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Whether the booking currently blocks its dates.
    pub fn blocks_dates(&self) -> bool {
        self.status.occupies_dates()
    }

    /// Human-readable booking reference: first 8 characters of the
    /// identifier, uppercased.
    pub fn reference(&self) -> String {
        reference_from_id(&self.id.to_string())
    }
}

/// Derive the human-readable reference from a booking identifier string.
pub fn reference_from_id(id: &str) -> String {
    id.chars().take(8).collect::<String>().to_uppercase()
}

/// Data required to create a new booking record in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// The room to book.
    pub room_id: RoomId,
    /// Guest full name (trimmed).
    pub guest_name: String,
    /// Guest email (trimmed).
    pub guest_email: String,
    /// Guest phone (trimmed).
    pub guest_phone: String,
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests_count: i32,
    /// Optional special request (None when blank).
    pub special_requests: Option<String>,
    /// Computed total price.
    pub total_price: i64,
    /// Initial status, always `pending` from the submission flow.
    pub status: BookingStatus,
}
