//! Integration tests exercising the Axum router against the in-memory
//! store provider.

mod helpers;

mod admin_test;
mod availability_test;
mod booking_test;
mod hooks_test;
