//! One-shot booking submission orchestration.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use guesthouse_core::error::AppError;
use guesthouse_core::events::BookingEvent;
use guesthouse_core::result::AppResult;
use guesthouse_core::types::RoomId;
use guesthouse_entity::booking::{Booking, BookingStatus, CreateBooking};
use guesthouse_entity::notification::BookingNotification;
use guesthouse_entity::room::Room;
use guesthouse_notify::dispatcher::NotificationDispatcher;
use guesthouse_realtime::feed::ChangeFeed;
use guesthouse_store::provider::StoreManager;
use guesthouse_store::traits::{BookingStore, RoomStore};

use crate::availability::span_is_free;
use crate::booking::flow::BookingFlow;
use crate::validation::{GuestDetailsInput, validate_details};

/// A complete submission request from the guest-facing flow.
#[derive(Debug, Clone)]
pub struct SubmitBooking {
    /// The room to book.
    pub room_id: RoomId,
    /// Guest form fields.
    pub details: GuestDetailsInput,
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests_count: i32,
}

/// Orchestrates the booking submission flow.
///
/// Drives a [`BookingFlow`] through its gates, creates the record in the
/// external store, publishes a change event, and enqueues the best-effort
/// notification. The notification path can never fail the booking.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// External store client.
    store: StoreManager,
    /// Change feed for admin dashboards.
    feed: Arc<ChangeFeed>,
    /// Post-commit notification queue.
    dispatcher: NotificationDispatcher,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        store: StoreManager,
        feed: Arc<ChangeFeed>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            store,
            feed,
            dispatcher,
        }
    }

    /// Submit a booking request.
    ///
    /// The price is computed from the room's price at this moment and
    /// stored with the booking; it is not revalidated later.
    pub async fn submit(&self, request: SubmitBooking) -> AppResult<Booking> {
        let room = self
            .store
            .get_room(request.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        let today = Utc::now().date_naive();
        let mut flow = BookingFlow::new();
        flow.select_room(room.clone())?;
        flow.select_dates(request.check_in, request.check_out, today)?;

        if !room.accommodates(request.guests_count) {
            return Err(AppError::validation(format!(
                "Number of guests must be between 1 and {}",
                room.capacity
            )));
        }

        let details = validate_details(&request.details).map_err(|fields| {
            AppError::validation("Invalid booking details")
                .with_details(serde_json::json!({ "fields": fields }))
        })?;

        // Re-check the whole span against the store's current list; the
        // calendar a guest saw may be stale by now.
        let existing = self.store.bookings_for_room(room.id).await?;
        if !span_is_free(room.id, request.check_in, request.check_out, &existing) {
            return Err(AppError::conflict(
                "Selected dates are no longer available for this room",
            ));
        }

        let nights = (request.check_out - request.check_in).num_days();
        let total_price = nights * room.price;

        flow.begin_submit()?;

        let create = CreateBooking {
            room_id: room.id,
            guest_name: details.guest_name,
            guest_email: details.guest_email,
            guest_phone: details.guest_phone,
            check_in: request.check_in,
            check_out: request.check_out,
            guests_count: request.guests_count,
            special_requests: details.special_requests,
            total_price,
            status: BookingStatus::Pending,
        };

        let booking = match self.store.create_booking(&create).await {
            Ok(booking) => booking,
            Err(e) => {
                flow.fail(e.message.clone());
                return Err(e);
            }
        };

        self.feed.publish(BookingEvent::Created {
            booking_id: booking.id.into_uuid(),
            room_id: booking.room_id.into_uuid(),
            timestamp: Utc::now(),
        });

        // Fire-and-forget: the booking is committed regardless of what
        // happens to the alert.
        self.dispatcher.enqueue(notification_payload(&booking, &room));

        flow.complete(&booking)?;

        info!(
            booking_id = %booking.id,
            room = %room.name,
            reference = %booking.reference(),
            nights,
            total_price,
            "Booking created"
        );

        Ok(booking)
    }
}

/// Build the webhook payload for a freshly created booking.
fn notification_payload(booking: &Booking, room: &Room) -> BookingNotification {
    BookingNotification {
        booking_id: booking.id.to_string(),
        guest_name: booking.guest_name.clone(),
        guest_phone: booking.guest_phone.clone(),
        room_name: room.name.clone(),
        check_in: booking.check_in.format("%B %-d, %Y").to_string(),
        check_out: booking.check_out.format("%B %-d, %Y").to_string(),
        total_price: booking.total_price,
    }
}
