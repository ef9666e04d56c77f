//! Domain events published on the change feed.

pub mod booking;

pub use booking::BookingEvent;
