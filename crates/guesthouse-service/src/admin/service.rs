//! Admin review service: list, filter, status transitions, aggregates.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use guesthouse_core::config::admin::AdminConfig;
use guesthouse_core::error::AppError;
use guesthouse_core::events::BookingEvent;
use guesthouse_core::result::AppResult;
use guesthouse_core::types::BookingId;
use guesthouse_entity::booking::{Booking, BookingStatus};
use guesthouse_realtime::feed::ChangeFeed;
use guesthouse_store::provider::StoreManager;
use guesthouse_store::traits::BookingStore;

use super::session::AdminSessionStore;

/// Status filter for the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every booking regardless of status.
    All,
    /// Awaiting review.
    Pending,
    /// Confirmed stays.
    Confirmed,
    /// Cancelled bookings.
    Cancelled,
}

impl StatusFilter {
    /// Whether a booking passes the filter.
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            Self::All => true,
            Self::Pending => booking.status == BookingStatus::Pending,
            Self::Confirmed => booking.status == BookingStatus::Confirmed,
            Self::Cancelled => booking.status == BookingStatus::Cancelled,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!("Invalid filter: {other}"))),
        }
    }
}

/// Aggregates shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Confirmed bookings checking in today.
    pub today_check_ins: usize,
    /// Confirmed bookings checking out today.
    pub today_check_outs: usize,
    /// Bookings awaiting review.
    pub pending: usize,
    /// Sum of total prices over confirmed bookings.
    pub revenue: i64,
}

/// The password-gated review flow over the reservation list.
///
/// Holds no booking state of its own: every read refetches from the
/// store, and a status change is followed by a fresh fetch rather than
/// an in-memory patch.
#[derive(Debug)]
pub struct AdminService {
    /// External store client.
    store: StoreManager,
    /// Change feed for publishing status changes.
    feed: Arc<ChangeFeed>,
    /// Dashboard settings (shared password, session TTL).
    config: AdminConfig,
    /// Issued dashboard sessions.
    sessions: AdminSessionStore,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(store: StoreManager, feed: Arc<ChangeFeed>, config: AdminConfig) -> Self {
        let sessions = AdminSessionStore::new(config.session_ttl_minutes);
        Self {
            store,
            feed,
            config,
            sessions,
        }
    }

    /// Exchange the dashboard password for a session token.
    ///
    /// There is no lockout or backoff; a wrong password is an inline
    /// authentication error.
    pub fn login(&self, password: &str) -> AppResult<String> {
        if password != self.config.dashboard_password {
            return Err(AppError::authentication("Invalid password"));
        }
        let token = self.sessions.issue();
        info!("Admin session issued");
        Ok(token)
    }

    /// Validate a dashboard session token.
    pub fn authorize(&self, token: &str) -> AppResult<()> {
        self.sessions.validate(token)
    }

    /// End a dashboard session.
    pub fn logout(&self, token: &str) {
        self.sessions.revoke(token);
    }

    /// List bookings, newest first, filtered in memory.
    pub async fn list(&self, filter: StatusFilter) -> AppResult<Vec<Booking>> {
        let bookings = self.store.list_bookings(true).await?;
        Ok(bookings.into_iter().filter(|b| filter.matches(b)).collect())
    }

    /// Transition a booking's status.
    ///
    /// Only `pending → confirmed` and `pending → cancelled` are offered;
    /// anything else is a conflict. The underlying store call enforces
    /// nothing itself.
    pub async fn set_status(&self, id: BookingId, status: BookingStatus) -> AppResult<Booking> {
        let booking = self
            .store
            .get_booking(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

        if !booking.status.can_transition_to(status) {
            return Err(AppError::conflict(format!(
                "Cannot change a {} booking to {status}",
                booking.status
            )));
        }

        let updated = self.store.update_status(id, status).await?;

        self.feed.publish(BookingEvent::StatusChanged {
            booking_id: updated.id.into_uuid(),
            room_id: updated.room_id.into_uuid(),
            status: status.as_str().to_string(),
            timestamp: Utc::now(),
        });

        info!(booking_id = %id, status = %status, "Booking status updated");
        Ok(updated)
    }

    /// Compute the dashboard aggregates from a fresh fetch.
    pub async fn dashboard(&self, today: NaiveDate) -> AppResult<DashboardStats> {
        let bookings = self.store.list_bookings(true).await?;

        let confirmed = |b: &&Booking| b.status == BookingStatus::Confirmed;
        let today_check_ins = bookings
            .iter()
            .filter(confirmed)
            .filter(|b| b.check_in == today)
            .count();
        let today_check_outs = bookings
            .iter()
            .filter(confirmed)
            .filter(|b| b.check_out == today)
            .count();
        let pending = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count();
        let revenue = bookings
            .iter()
            .filter(confirmed)
            .map(|b| b.total_price)
            .sum();

        Ok(DashboardStats {
            today_check_ins,
            today_check_outs,
            pending,
            revenue,
        })
    }
}
