//! # guesthouse-service
//!
//! The booking core: availability computation over existing reservations,
//! guest detail validation, the booking submission flow, and the admin
//! review flow. Everything here operates on transient copies fetched from
//! the external store; nothing is cached across requests.

pub mod admin;
pub mod availability;
pub mod booking;
pub mod validation;

pub use admin::service::{AdminService, DashboardStats, StatusFilter};
pub use availability::AvailabilityView;
pub use booking::flow::BookingFlow;
pub use booking::service::{BookingService, SubmitBooking};
pub use validation::{FieldErrors, GuestDetails, GuestDetailsInput};
