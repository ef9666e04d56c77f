//! # guesthouse-entity
//!
//! Domain models for the Casa Serena booking service: rooms, bookings with
//! their status lifecycle, registered push devices, and the notification
//! payload that crosses the webhook boundary.

pub mod booking;
pub mod device;
pub mod notification;
pub mod room;

pub use booking::{Booking, BookingStatus, CreateBooking};
pub use device::{DeviceToken, RegisterDeviceToken};
pub use notification::BookingNotification;
pub use room::Room;
