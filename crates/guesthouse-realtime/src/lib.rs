//! # guesthouse-realtime
//!
//! Booking change feed. Services publish [`BookingEvent`]s after every
//! successful store mutation; admin dashboards subscribe over WebSocket
//! and refetch the reservation list when anything changes.
//!
//! [`BookingEvent`]: guesthouse_core::events::BookingEvent

pub mod feed;
pub mod message;

pub use feed::ChangeFeed;
pub use message::ChangeMessage;
