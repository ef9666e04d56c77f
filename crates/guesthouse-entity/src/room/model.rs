//! Room entity model.

use serde::{Deserialize, Serialize};

use guesthouse_core::types::RoomId;

/// A bookable unit with a fixed nightly price and guest capacity.
///
/// Rooms are owned and edited by the external store's administrators;
/// from this service's perspective they are read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Nightly price in whole currency units.
    pub price: i64,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Marketing description.
    pub description: String,
    /// Feature tags shown on the rooms page.
    pub features: Vec<String>,
}

impl Room {
    /// Whether the room can accommodate the given party size.
    pub fn accommodates(&self, guests: i32) -> bool {
        guests >= 1 && guests <= self.capacity
    }
}
