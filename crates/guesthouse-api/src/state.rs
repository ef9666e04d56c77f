//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use guesthouse_core::config::AppConfig;
use guesthouse_notify::push::PushForwarder;
use guesthouse_notify::whatsapp::WhatsAppForwarder;
use guesthouse_realtime::feed::ChangeFeed;
use guesthouse_service::admin::service::AdminService;
use guesthouse_service::booking::service::BookingService;
use guesthouse_store::provider::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// External store client.
    pub store: StoreManager,
    /// Booking change feed.
    pub feed: Arc<ChangeFeed>,
    /// Guest-facing submission flow.
    pub booking_service: Arc<BookingService>,
    /// Admin review flow.
    pub admin_service: Arc<AdminService>,
    /// WhatsApp forwarder (webhook handler collaborator).
    pub whatsapp: Arc<WhatsAppForwarder>,
    /// Push forwarder (webhook handler collaborator).
    pub push: Arc<PushForwarder>,
}
