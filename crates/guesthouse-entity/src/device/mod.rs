//! Registered push device entity.

pub mod model;

pub use model::{DeviceToken, RegisterDeviceToken};
