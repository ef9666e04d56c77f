//! The booking wizard state machine.
//!
//! `selecting-room → selecting-dates → entering-details → submitting →
//! confirmed`, with a failed submission returning to `entering-details`
//! for a retry. Picking a different room resets any chosen dates, since
//! they may not be available for the new room.

use chrono::NaiveDate;

use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;
use guesthouse_entity::booking::Booking;
use guesthouse_entity::room::Room;

/// Current position in the booking wizard.
#[derive(Debug, Clone)]
pub enum FlowState {
    /// No room chosen yet.
    SelectingRoom,
    /// Room chosen, dates pending.
    SelectingDates {
        /// The chosen room.
        room: Room,
    },
    /// Room and dates chosen, guest details pending.
    EnteringDetails {
        /// The chosen room.
        room: Room,
        /// First occupied night.
        check_in: NaiveDate,
        /// Departure date (exclusive).
        check_out: NaiveDate,
    },
    /// Submission in flight.
    Submitting {
        /// The chosen room.
        room: Room,
        /// First occupied night.
        check_in: NaiveDate,
        /// Departure date (exclusive).
        check_out: NaiveDate,
    },
    /// The booking was created (terminal).
    Confirmed {
        /// Human-readable booking reference.
        reference: String,
    },
}

/// Driver for the guest-facing submission wizard.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    state: FlowState,
    /// Message from the most recent failed submission, if any.
    last_error: Option<String>,
}

impl BookingFlow {
    /// Start a fresh flow.
    pub fn new() -> Self {
        Self {
            state: FlowState::SelectingRoom,
            last_error: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Error surfaced by the last failed submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Pick (or switch) the room. Resets any previously chosen dates.
    pub fn select_room(&mut self, room: Room) -> AppResult<()> {
        if matches!(self.state, FlowState::Confirmed { .. }) {
            return Err(AppError::conflict("Booking already confirmed"));
        }
        self.state = FlowState::SelectingDates { room };
        Ok(())
    }

    /// Choose the stay dates.
    ///
    /// Requires a selected room, a check-in that is not in the past, and
    /// at least one night.
    pub fn select_dates(
        &mut self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<()> {
        let room = match &self.state {
            FlowState::SelectingDates { room }
            | FlowState::EnteringDetails { room, .. } => room.clone(),
            FlowState::SelectingRoom => {
                return Err(AppError::validation("Please select a room first"));
            }
            _ => return Err(AppError::conflict("Dates can no longer be changed")),
        };

        if check_in < today {
            return Err(AppError::validation("Check-in date cannot be in the past"));
        }
        if (check_out - check_in).num_days() < 1 {
            return Err(AppError::validation(
                "Check-out must be at least one day after check-in",
            ));
        }

        self.state = FlowState::EnteringDetails {
            room,
            check_in,
            check_out,
        };
        Ok(())
    }

    /// Move into the submitting state once the details are validated.
    pub fn begin_submit(&mut self) -> AppResult<()> {
        match &self.state {
            FlowState::EnteringDetails {
                room,
                check_in,
                check_out,
            } => {
                self.state = FlowState::Submitting {
                    room: room.clone(),
                    check_in: *check_in,
                    check_out: *check_out,
                };
                Ok(())
            }
            _ => Err(AppError::conflict("Room, dates, and details are required")),
        }
    }

    /// Record a successful creation. Terminal.
    pub fn complete(&mut self, booking: &Booking) -> AppResult<()> {
        match &self.state {
            FlowState::Submitting { .. } => {
                self.last_error = None;
                self.state = FlowState::Confirmed {
                    reference: booking.reference(),
                };
                Ok(())
            }
            _ => Err(AppError::conflict("No submission in flight")),
        }
    }

    /// Record a store-level rejection and return to the details step so
    /// the guest can retry.
    pub fn fail(&mut self, error: impl Into<String>) {
        if let FlowState::Submitting {
            room,
            check_in,
            check_out,
        } = &self.state
        {
            self.last_error = Some(error.into());
            self.state = FlowState::EnteringDetails {
                room: room.clone(),
                check_in: *check_in,
                check_out: *check_out,
            };
        }
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use guesthouse_core::types::{BookingId, RoomId};
    use guesthouse_entity::booking::BookingStatus;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("date")
    }

    fn room(name: &str) -> Room {
        Room {
            id: RoomId::new(),
            name: name.to_string(),
            price: 149,
            capacity: 2,
            description: String::new(),
            features: vec![],
        }
    }

    fn booking(room: &Room) -> Booking {
        Booking {
            id: BookingId::new(),
            room_id: room.id,
            guest_name: "Jane Doe".to_string(),
            guest_email: "jane@example.com".to_string(),
            guest_phone: "+1 234 567 8900".to_string(),
            check_in: date("2026-09-10"),
            check_out: date("2026-09-12"),
            guests_count: 2,
            special_requests: None,
            status: BookingStatus::Pending,
            total_price: 298,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_happy_path() {
        let today = date("2026-09-01");
        let r = room("Deluxe Room");
        let mut flow = BookingFlow::new();

        flow.select_room(r.clone()).expect("select room");
        flow.select_dates(date("2026-09-10"), date("2026-09-12"), today)
            .expect("select dates");
        flow.begin_submit().expect("begin submit");
        flow.complete(&booking(&r)).expect("complete");

        match flow.state() {
            FlowState::Confirmed { reference } => assert_eq!(reference.len(), 8),
            other => panic!("expected Confirmed, got {other:?}"),
        }
    }

    #[test]
    fn test_room_switch_resets_dates() {
        let today = date("2026-09-01");
        let mut flow = BookingFlow::new();

        flow.select_room(room("Comfort Room")).unwrap();
        flow.select_dates(date("2026-09-10"), date("2026-09-12"), today)
            .unwrap();
        assert!(matches!(flow.state(), FlowState::EnteringDetails { .. }));

        flow.select_room(room("Grand Suite")).unwrap();
        assert!(matches!(flow.state(), FlowState::SelectingDates { .. }));
    }

    #[test]
    fn test_dates_require_room() {
        let mut flow = BookingFlow::new();
        let err = flow
            .select_dates(date("2026-09-10"), date("2026-09-12"), date("2026-09-01"))
            .expect_err("no room yet");
        assert!(err.message.contains("room"));
    }

    #[test]
    fn test_minimum_one_night() {
        let mut flow = BookingFlow::new();
        flow.select_room(room("Comfort Room")).unwrap();

        let same_day = flow.select_dates(date("2026-09-10"), date("2026-09-10"), date("2026-09-01"));
        assert!(same_day.is_err());

        let reversed = flow.select_dates(date("2026-09-12"), date("2026-09-10"), date("2026-09-01"));
        assert!(reversed.is_err());
    }

    #[test]
    fn test_past_check_in_rejected() {
        let mut flow = BookingFlow::new();
        flow.select_room(room("Comfort Room")).unwrap();
        let err = flow
            .select_dates(date("2026-08-30"), date("2026-09-02"), date("2026-09-01"))
            .expect_err("past check-in");
        assert!(err.message.contains("past"));
    }

    #[test]
    fn test_failure_returns_to_details_for_retry() {
        let today = date("2026-09-01");
        let r = room("Deluxe Room");
        let mut flow = BookingFlow::new();

        flow.select_room(r.clone()).unwrap();
        flow.select_dates(date("2026-09-10"), date("2026-09-12"), today)
            .unwrap();
        flow.begin_submit().unwrap();
        flow.fail("store rejected the booking");

        assert!(matches!(flow.state(), FlowState::EnteringDetails { .. }));
        assert_eq!(flow.last_error(), Some("store rejected the booking"));

        // Retry succeeds and clears the error.
        flow.begin_submit().unwrap();
        flow.complete(&booking(&r)).unwrap();
        assert!(flow.last_error().is_none());
    }

    #[test]
    fn test_confirmed_is_terminal() {
        let today = date("2026-09-01");
        let r = room("Deluxe Room");
        let mut flow = BookingFlow::new();
        flow.select_room(r.clone()).unwrap();
        flow.select_dates(date("2026-09-10"), date("2026-09-12"), today)
            .unwrap();
        flow.begin_submit().unwrap();
        flow.complete(&booking(&r)).unwrap();

        assert!(flow.select_room(room("Comfort Room")).is_err());
        assert!(flow.begin_submit().is_err());
    }
}
