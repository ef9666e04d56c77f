//! Availability computation for the booking calendar.
//!
//! Pure functions over the current reservation list. Callers fetch the
//! non-cancelled bookings for a room and ask date by date; results are
//! never cached because another guest can book concurrently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use guesthouse_core::types::RoomId;
use guesthouse_entity::booking::Booking;

/// True iff some non-cancelled booking for `room_id` occupies `date`.
///
/// A booking occupies `[check_in, check_out)`: its check-out day is never
/// booked by it, which enables same-day turnover.
pub fn is_date_booked(date: NaiveDate, room_id: RoomId, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .filter(|b| b.room_id == room_id && b.blocks_dates())
        .any(|b| b.occupies(date))
}

/// Whether `date` can be chosen as a check-in day.
///
/// Past dates are never selectable, nor are dates inside an existing
/// reservation.
pub fn is_check_in_selectable(
    date: NaiveDate,
    room_id: RoomId,
    today: NaiveDate,
    bookings: &[Booking],
) -> bool {
    date >= today && !is_date_booked(date, room_id, bookings)
}

/// Whether `date` can be chosen as a check-out day for a stay starting
/// at `check_in`.
///
/// Enforces the minimum one-night stay on top of the check-in rules.
pub fn is_check_out_selectable(
    date: NaiveDate,
    room_id: RoomId,
    check_in: NaiveDate,
    today: NaiveDate,
    bookings: &[Booking],
) -> bool {
    date >= check_in.succ_opt().unwrap_or(check_in)
        && date >= today
        && !is_date_booked(date, room_id, bookings)
}

/// Whether the whole span `[check_in, check_out)` is free of conflicting
/// reservations.
///
/// Guarding only the two endpoint dates would admit a range that swallows
/// a third party's reservation in the middle; the submission path uses
/// this full scan instead.
pub fn span_is_free(
    room_id: RoomId,
    check_in: NaiveDate,
    check_out: NaiveDate,
    bookings: &[Booking],
) -> bool {
    check_in
        .iter_days()
        .take_while(|d| *d < check_out)
        .all(|d| !is_date_booked(d, room_id, bookings))
}

/// Derived per-room availability over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityView {
    /// The room this view describes.
    pub room_id: RoomId,
    /// First date of the window (inclusive).
    pub from: NaiveDate,
    /// Last date of the window (inclusive).
    pub to: NaiveDate,
    /// Dates covered by a non-cancelled reservation.
    pub booked: Vec<NaiveDate>,
    /// Dates open for a new check-in (past dates excluded).
    pub available: Vec<NaiveDate>,
}

/// Partition the dates in `[from, to]` for a room.
pub fn calendar(
    room_id: RoomId,
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
    bookings: &[Booking],
) -> AvailabilityView {
    let mut booked = Vec::new();
    let mut available = Vec::new();

    for date in from.iter_days().take_while(|d| *d <= to) {
        if is_date_booked(date, room_id, bookings) {
            booked.push(date);
        } else if date >= today {
            available.push(date);
        }
    }

    AvailabilityView {
        room_id,
        from,
        to,
        booked,
        available,
    }
}
