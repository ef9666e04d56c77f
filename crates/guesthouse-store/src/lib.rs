//! # guesthouse-store
//!
//! Client for the external managed data store that owns all persistence:
//! rooms, bookings, and device tokens. This crate never implements storage
//! itself; it speaks the store's REST API (the `rest` provider) or keeps
//! plain in-process tables for tests and local development (the `memory`
//! provider).

pub mod memory;
pub mod provider;
pub mod rest;
pub mod traits;

pub use memory::MemoryStore;
pub use provider::StoreManager;
pub use rest::RestStore;
pub use traits::{BookingStore, DeviceTokenStore, RoomStore, Store};
