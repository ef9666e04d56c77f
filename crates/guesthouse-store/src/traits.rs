//! Store access traits.
//!
//! Each trait covers one table owned by the external backend. Providers
//! implement all three; flows hold only transient copies of what they
//! fetch and refetch rather than patching local state.

use async_trait::async_trait;

use guesthouse_core::result::AppResult;
use guesthouse_core::types::{BookingId, RoomId};
use guesthouse_entity::booking::{Booking, BookingStatus, CreateBooking};
use guesthouse_entity::device::{DeviceToken, RegisterDeviceToken};
use guesthouse_entity::room::Room;

/// Read access to the rooms table.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// List all rooms.
    async fn list_rooms(&self) -> AppResult<Vec<Room>>;

    /// Find a room by ID.
    async fn get_room(&self, id: RoomId) -> AppResult<Option<Room>>;
}

/// Access to the bookings table.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// List bookings, newest first. Cancelled entries are included only
    /// when `include_cancelled` is set (the admin list view wants them).
    async fn list_bookings(&self, include_cancelled: bool) -> AppResult<Vec<Booking>>;

    /// List non-cancelled bookings for one room (availability input).
    async fn bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>>;

    /// Find a booking by ID.
    async fn get_booking(&self, id: BookingId) -> AppResult<Option<Booking>>;

    /// Create a booking and return the stored record with its generated
    /// identifier.
    async fn create_booking(&self, create: &CreateBooking) -> AppResult<Booking>;

    /// Update a booking's status, keyed by identifier.
    ///
    /// The store call itself enforces no transition rules; the review
    /// flow guards transitions before calling this.
    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<Booking>;
}

/// Access to the device tokens table.
#[async_trait]
pub trait DeviceTokenStore: Send + Sync {
    /// List all registered device tokens.
    async fn list_tokens(&self) -> AppResult<Vec<DeviceToken>>;

    /// Register a token (upsert keyed by the token value).
    async fn register_token(&self, registration: &RegisterDeviceToken) -> AppResult<DeviceToken>;

    /// Remove a token. Returns `true` if it existed.
    async fn remove_token(&self, token: &str) -> AppResult<bool>;
}

/// Full store surface implemented by every provider.
pub trait Store: RoomStore + BookingStore + DeviceTokenStore {}

impl<T: RoomStore + BookingStore + DeviceTokenStore> Store for T {}
