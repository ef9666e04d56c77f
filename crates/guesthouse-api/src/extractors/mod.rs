//! Custom Axum extractors.

pub mod admin;

pub use admin::AdminToken;
