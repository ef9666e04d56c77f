//! Route definitions for the guesthouse HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(webhook_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Guest-facing endpoints: rooms, availability, booking, content, devices.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::rooms::list_rooms))
        .route("/rooms/{id}", get(handlers::rooms::get_room))
        .route(
            "/rooms/{id}/availability",
            get(handlers::rooms::room_availability),
        )
        .route("/bookings", post(handlers::bookings::create_booking))
        .route("/devices", post(handlers::devices::register_device))
        .route("/content/about", get(handlers::content::about))
        .route("/content/gallery", get(handlers::content::gallery))
        .route("/content/contact", get(handlers::content::contact))
}

/// Notification webhooks (stateless forwarder handlers).
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/hooks/notify-booking", post(handlers::hooks::notify_booking))
        .route("/hooks/push", post(handlers::hooks::push_notification))
}

/// Password-gated dashboard endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::admin::login))
        .route("/admin/logout", post(handlers::admin::logout))
        .route("/admin/bookings", get(handlers::admin::list_bookings))
        .route(
            "/admin/bookings/{id}/status",
            put(handlers::admin::update_status),
        )
        .route("/admin/dashboard", get(handlers::admin::dashboard))
        .route("/admin/ws", get(handlers::ws::ws_upgrade))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
