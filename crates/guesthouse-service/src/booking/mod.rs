//! Booking submission flow.

pub mod flow;
pub mod service;

pub use flow::BookingFlow;
pub use service::{BookingService, SubmitBooking};
