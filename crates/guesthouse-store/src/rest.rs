//! REST provider speaking the managed backend's PostgREST-style API.
//!
//! Rows come and go as JSON arrays; `create` and `update` ask for the
//! stored representation back so callers always see what the backend
//! actually persisted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};

use guesthouse_core::config::store::StoreConfig;
use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;
use guesthouse_core::types::{BookingId, RoomId};
use guesthouse_entity::booking::{Booking, BookingStatus, CreateBooking};
use guesthouse_entity::device::{DeviceToken, RegisterDeviceToken};
use guesthouse_entity::room::Room;

use crate::traits::{BookingStore, DeviceTokenStore, RoomStore};

/// HTTP client for the external store.
#[derive(Debug, Clone)]
pub struct RestStore {
    /// Shared HTTP client.
    http: Client,
    /// Store connection settings.
    config: StoreConfig,
}

impl RestStore {
    /// Create a new REST store client from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        if config.base_url.is_empty() {
            return Err(AppError::configuration(
                "store.base_url is required for the rest provider",
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::with_source(
                guesthouse_core::error::ErrorKind::Configuration,
                format!("Failed to build store HTTP client: {e}"),
                e,
            ))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Build a request against a table path with the store's auth headers.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/rest/v1/{path}",
            self.config.base_url.trim_end_matches('/')
        );
        let mut req = self.http.request(method, url);
        if let Some(api_key) = &self.config.api_key {
            req = req.header("apikey", api_key);
        }
        if let Some(service_key) = &self.config.service_key {
            req = req.header("Authorization", format!("Bearer {service_key}"));
        }
        req
    }

    /// Send a request and deserialize a JSON row array.
    async fn fetch_rows<T: serde::de::DeserializeOwned>(
        &self,
        req: RequestBuilder,
        context: &str,
    ) -> AppResult<Vec<T>> {
        let response = req
            .send()
            .await
            .map_err(|e| store_error(context, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::store(format!(
                "{context}: store responded {status}: {body}"
            )));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| store_error(context, e))
    }

    /// Send a request and expect exactly one row back.
    async fn fetch_one<T: serde::de::DeserializeOwned>(
        &self,
        req: RequestBuilder,
        context: &str,
    ) -> AppResult<T> {
        let mut rows = self.fetch_rows::<T>(req, context).await?;
        if rows.is_empty() {
            return Err(AppError::not_found(format!("{context}: no row returned")));
        }
        Ok(rows.swap_remove(0))
    }
}

fn store_error(context: &str, err: impl std::error::Error + Send + Sync + 'static) -> AppError {
    AppError::with_source(
        guesthouse_core::error::ErrorKind::Store,
        format!("{context}: {err}"),
        err,
    )
}

#[async_trait]
impl RoomStore for RestStore {
    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let req = self.request(Method::GET, "rooms?select=*&order=price.asc");
        self.fetch_rows(req, "list rooms").await
    }

    async fn get_room(&self, id: RoomId) -> AppResult<Option<Room>> {
        let req = self.request(Method::GET, &format!("rooms?id=eq.{id}&select=*"));
        let mut rows: Vec<Room> = self.fetch_rows(req, "get room").await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }
}

#[async_trait]
impl BookingStore for RestStore {
    async fn list_bookings(&self, include_cancelled: bool) -> AppResult<Vec<Booking>> {
        let path = if include_cancelled {
            "bookings?select=*&order=created_at.desc".to_string()
        } else {
            "bookings?select=*&status=neq.cancelled&order=created_at.desc".to_string()
        };
        let req = self.request(Method::GET, &path);
        self.fetch_rows(req, "list bookings").await
    }

    async fn bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>> {
        let req = self.request(
            Method::GET,
            &format!("bookings?select=*&room_id=eq.{room_id}&status=neq.cancelled"),
        );
        self.fetch_rows(req, "list bookings for room").await
    }

    async fn get_booking(&self, id: BookingId) -> AppResult<Option<Booking>> {
        let req = self.request(Method::GET, &format!("bookings?id=eq.{id}&select=*"));
        let mut rows: Vec<Booking> = self.fetch_rows(req, "get booking").await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn create_booking(&self, create: &CreateBooking) -> AppResult<Booking> {
        let req = self
            .request(Method::POST, "bookings")
            .header("Prefer", "return=representation")
            .json(create);
        self.fetch_one(req, "create booking").await
    }

    async fn update_status(&self, id: BookingId, status: BookingStatus) -> AppResult<Booking> {
        let req = self
            .request(Method::PATCH, &format!("bookings?id=eq.{id}"))
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "status": status }));
        self.fetch_one(req, "update booking status").await
    }
}

#[async_trait]
impl DeviceTokenStore for RestStore {
    async fn list_tokens(&self) -> AppResult<Vec<DeviceToken>> {
        let req = self.request(Method::GET, "device_tokens?select=*");
        self.fetch_rows(req, "list device tokens").await
    }

    async fn register_token(&self, registration: &RegisterDeviceToken) -> AppResult<DeviceToken> {
        let req = self
            .request(Method::POST, "device_tokens?on_conflict=token")
            .header(
                "Prefer",
                "resolution=merge-duplicates,return=representation",
            )
            .json(registration);
        self.fetch_one(req, "register device token").await
    }

    async fn remove_token(&self, token: &str) -> AppResult<bool> {
        let req = self
            .request(Method::DELETE, &format!("device_tokens?token=eq.{token}"))
            .header("Prefer", "return=representation");
        let removed: Vec<DeviceToken> = self.fetch_rows(req, "remove device token").await?;
        Ok(!removed.is_empty())
    }
}
