//! # guesthouse-notify
//!
//! Outbound notification forwarders. Each forwarder turns a booking
//! event payload into exactly one third-party delivery call (WhatsApp
//! gateway) or one call per registered device (FCM push). Delivery is
//! strictly best-effort: missing configuration degrades to a logged
//! skip, and no failure here ever reaches the booking flow.

pub mod dispatcher;
pub mod push;
pub mod whatsapp;

pub use dispatcher::NotificationDispatcher;
pub use push::{PushForwarder, PushOutcome};
pub use whatsapp::{WhatsAppForwarder, WhatsAppOutcome};
