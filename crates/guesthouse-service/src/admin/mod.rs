//! Admin review flow.

pub mod service;
pub mod session;

pub use service::{AdminService, DashboardStats, StatusFilter};
pub use session::AdminSessionStore;
