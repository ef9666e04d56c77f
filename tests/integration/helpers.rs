//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use guesthouse_api::state::AppState;
use guesthouse_core::config::AppConfig;
use guesthouse_core::config::admin::AdminConfig;
use guesthouse_core::config::app::{CorsConfig, ServerConfig};
use guesthouse_core::config::logging::LoggingConfig;
use guesthouse_core::config::notify::NotifyConfig;
use guesthouse_core::config::realtime::RealtimeConfig;
use guesthouse_core::config::store::StoreConfig;
use guesthouse_notify::dispatcher::NotificationDispatcher;
use guesthouse_notify::push::PushForwarder;
use guesthouse_notify::whatsapp::WhatsAppForwarder;
use guesthouse_realtime::feed::ChangeFeed;
use guesthouse_service::admin::service::AdminService;
use guesthouse_service::booking::service::BookingService;
use guesthouse_store::memory::MemoryStore;
use guesthouse_store::provider::StoreManager;

pub const TEST_PASSWORD: &str = "admin123";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Direct handle on the in-memory store for seeding and asserting.
    pub store: Arc<MemoryStore>,
    /// The change feed, for subscribing in tests.
    pub feed: Arc<ChangeFeed>,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_seconds: 5,
            shutdown_grace_seconds: 1,
            cors: CorsConfig::default(),
        },
        store: StoreConfig::default(),
        admin: AdminConfig {
            dashboard_password: TEST_PASSWORD.to_string(),
            session_ttl_minutes: 60,
        },
        notify: NotifyConfig::default(),
        realtime: RealtimeConfig::default(),
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Create a new test application over a seeded in-memory store.
    ///
    /// Notification forwarders are left unconfigured, so they skip
    /// instead of making outbound calls.
    pub fn new() -> Self {
        let config = test_config();

        let memory = Arc::new(MemoryStore::seeded());
        let store = StoreManager::from_provider(memory.clone());
        let feed = Arc::new(ChangeFeed::new(config.realtime.channel_capacity));

        let http = reqwest::Client::new();
        let whatsapp = WhatsAppForwarder::new(config.notify.whatsapp.clone(), http.clone());
        let push = PushForwarder::new(config.notify.push.clone(), http, memory.clone());
        let (dispatcher, _handle) =
            NotificationDispatcher::spawn(whatsapp.clone(), push.clone(), 16);

        let booking_service = Arc::new(BookingService::new(
            store.clone(),
            Arc::clone(&feed),
            dispatcher,
        ));
        let admin_service = Arc::new(AdminService::new(
            store.clone(),
            Arc::clone(&feed),
            config.admin.clone(),
        ));

        let app_state = AppState {
            config: Arc::new(config),
            store,
            feed: Arc::clone(&feed),
            booking_service,
            admin_service,
            whatsapp: Arc::new(whatsapp),
            push: Arc::new(push),
        };

        let router = guesthouse_api::router::build_router(app_state);

        Self {
            router,
            store: memory,
            feed,
        }
    }

    /// List the seeded rooms through the API and return them as JSON.
    pub async fn rooms(&self) -> Vec<Value> {
        let response = self.request("GET", "/api/rooms", None, None).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]
            .as_array()
            .expect("rooms array")
            .clone()
    }

    /// Login and return an admin session token.
    pub async fn admin_login(&self) -> String {
        let body = serde_json::json!({ "password": TEST_PASSWORD });
        let response = self.request("POST", "/api/admin/login", Some(body), None).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body["data"]["token"]
            .as_str()
            .expect("token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        admin_token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = admin_token {
            req = req.header("X-Admin-Token", token);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

/// A date `days` days from now, formatted `YYYY-MM-DD`.
pub fn future_date(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days)).to_string()
}

/// A valid booking request body for the given room.
pub fn booking_body(room_id: &str, check_in: &str, check_out: &str) -> Value {
    serde_json::json!({
        "room_id": room_id,
        "guest_name": "Jane Doe",
        "guest_email": "jane@example.com",
        "guest_phone": "+1 234 567 8900",
        "check_in": check_in,
        "check_out": check_out,
        "guests_count": 2,
    })
}
