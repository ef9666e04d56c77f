//! In-memory store provider for tests and local development.
//!
//! Mirrors the external backend's tables as plain in-process collections.
//! `seeded()` loads the guesthouse's three rooms so the booking flow works
//! out of the box without a backend.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::RwLock;

use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;
use guesthouse_core::types::{BookingId, RoomId};
use guesthouse_entity::booking::{Booking, BookingStatus, CreateBooking};
use guesthouse_entity::device::{DeviceToken, RegisterDeviceToken};
use guesthouse_entity::room::Room;

use crate::traits::{BookingStore, DeviceTokenStore, RoomStore};

/// In-memory store implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Rooms table.
    rooms: RwLock<Vec<Room>>,
    /// Bookings table.
    bookings: RwLock<Vec<Booking>>,
    /// Device tokens keyed by token value.
    tokens: DashMap<String, DeviceToken>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the guesthouse's rooms.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut rooms = store
                .rooms
                .try_write()
                .expect("fresh store has no readers");
            *rooms = seed_rooms();
        }
        store
    }

    /// Insert a room directly (test setup).
    pub async fn insert_room(&self, room: Room) {
        self.rooms.write().await.push(room);
    }

    /// Insert a booking directly (test setup).
    pub async fn insert_booking(&self, booking: Booking) {
        self.bookings.write().await.push(booking);
    }
}

fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: RoomId::new(),
            name: "Comfort Room".to_string(),
            price: 89,
            capacity: 2,
            description: "Our cozy Comfort Room is perfect for solo travelers or couples \
                          seeking a peaceful retreat."
                .to_string(),
            features: vec![
                "Free Wi-Fi".to_string(),
                "Air Conditioning".to_string(),
                "En-suite Bathroom".to_string(),
                "Garden View".to_string(),
            ],
        },
        Room {
            id: RoomId::new(),
            name: "Deluxe Room".to_string(),
            price: 149,
            capacity: 2,
            description: "Spacious and elegantly appointed, our Deluxe Room offers premium \
                          comfort with a private balcony overlooking the countryside."
                .to_string(),
            features: vec![
                "Free Wi-Fi".to_string(),
                "Private Balcony".to_string(),
                "Mini Bar".to_string(),
                "Premium Linens".to_string(),
            ],
        },
        Room {
            id: RoomId::new(),
            name: "Grand Suite".to_string(),
            price: 249,
            capacity: 4,
            description: "Our luxurious Grand Suite features a separate living area, panoramic \
                          views, and exclusive amenities for an unforgettable stay."
                .to_string(),
            features: vec![
                "Free Wi-Fi".to_string(),
                "Panoramic Views".to_string(),
                "Separate Living Area".to_string(),
                "Mini Kitchen".to_string(),
                "Complimentary Breakfast".to_string(),
            ],
        },
    ]
}

#[async_trait]
impl RoomStore for MemoryStore {
    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let mut rooms = self.rooms.read().await.clone();
        rooms.sort_by_key(|r| r.price);
        Ok(rooms)
    }

    async fn get_room(&self, id: RoomId) -> AppResult<Option<Room>> {
        Ok(self.rooms.read().await.iter().find(|r| r.id == id).cloned())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list_bookings(&self, include_cancelled: bool) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| include_cancelled || b.status != BookingStatus::Cancelled)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.room_id == room_id && b.status != BookingStatus::Cancelled)
            .cloned()
            .collect())
    }

    async fn get_booking(&self, id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create_booking(&self, create: &CreateBooking) -> AppResult<Booking> {
        let booking = Booking {
            id: BookingId::new(),
            room_id: create.room_id,
            guest_name: create.guest_name.clone(),
            guest_email: create.guest_email.clone(),
            guest_phone: create.guest_phone.clone(),
            check_in: create.check_in,
            check_out: create.check_out,
            guests_count: create.guests_count,
            special_requests: create.special_requests.clone(),
            status: create.status,
            total_price: create.total_price,
            created_at: Utc::now(),
        };
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<Booking> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        booking.status = status;
        Ok(booking.clone())
    }
}

#[async_trait]
impl DeviceTokenStore for MemoryStore {
    async fn list_tokens(&self) -> AppResult<Vec<DeviceToken>> {
        Ok(self.tokens.iter().map(|e| e.value().clone()).collect())
    }

    async fn register_token(&self, registration: &RegisterDeviceToken) -> AppResult<DeviceToken> {
        let token = self
            .tokens
            .entry(registration.token.clone())
            .and_modify(|existing| {
                existing.device_type = registration.device_type.clone();
            })
            .or_insert_with(|| DeviceToken {
                token: registration.token.clone(),
                device_type: registration.device_type.clone(),
                created_at: Utc::now(),
            })
            .clone();
        Ok(token)
    }

    async fn remove_token(&self, token: &str) -> AppResult<bool> {
        Ok(self.tokens.remove(token).is_some())
    }
}
