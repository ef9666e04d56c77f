//! # guesthouse-core
//!
//! Core crate for the Casa Serena booking service. Contains configuration
//! schemas, typed identifiers, domain events, shared response types, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other guesthouse crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
