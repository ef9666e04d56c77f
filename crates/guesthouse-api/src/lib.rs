//! # guesthouse-api
//!
//! Axum HTTP surface for the booking service: public marketing and
//! booking endpoints, the password-gated admin dashboard API, the
//! notification webhooks, and the admin change-feed WebSocket.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
