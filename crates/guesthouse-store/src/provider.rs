//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use guesthouse_core::config::store::StoreConfig;
use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;
use guesthouse_core::types::{BookingId, RoomId};
use guesthouse_entity::booking::{Booking, BookingStatus, CreateBooking};
use guesthouse_entity::device::{DeviceToken, RegisterDeviceToken};
use guesthouse_entity::room::Room;

use crate::memory::MemoryStore;
use crate::rest::RestStore;
use crate::traits::{BookingStore, DeviceTokenStore, RoomStore, Store};

/// Store manager that wraps the configured store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn Store>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn Store> = match config.provider.as_str() {
            "rest" => {
                info!(base_url = %config.base_url, "Initializing REST store provider");
                Arc::new(RestStore::new(config)?)
            }
            "memory" => {
                info!("Initializing in-memory store provider");
                Arc::new(MemoryStore::seeded())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: rest, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn Store>) -> Self {
        Self { inner: provider }
    }
}

impl std::fmt::Debug for StoreManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreManager").finish_non_exhaustive()
    }
}

#[async_trait]
impl RoomStore for StoreManager {
    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        self.inner.list_rooms().await
    }

    async fn get_room(&self, id: RoomId) -> AppResult<Option<Room>> {
        self.inner.get_room(id).await
    }
}

#[async_trait]
impl BookingStore for StoreManager {
    async fn list_bookings(&self, include_cancelled: bool) -> AppResult<Vec<Booking>> {
        self.inner.list_bookings(include_cancelled).await
    }

    async fn bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>> {
        self.inner.bookings_for_room(room_id).await
    }

    async fn get_booking(&self, id: BookingId) -> AppResult<Option<Booking>> {
        self.inner.get_booking(id).await
    }

    async fn create_booking(&self, create: &CreateBooking) -> AppResult<Booking> {
        self.inner.create_booking(create).await
    }

    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<Booking> {
        self.inner.update_status(id, status).await
    }
}

#[async_trait]
impl DeviceTokenStore for StoreManager {
    async fn list_tokens(&self) -> AppResult<Vec<DeviceToken>> {
        self.inner.list_tokens().await
    }

    async fn register_token(&self, registration: &RegisterDeviceToken) -> AppResult<DeviceToken> {
        self.inner.register_token(registration).await
    }

    async fn remove_token(&self, token: &str) -> AppResult<bool> {
        self.inner.remove_token(token).await
    }
}
