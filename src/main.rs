//! Casa Serena booking server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use guesthouse_core::config::AppConfig;
use guesthouse_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("GUESTHOUSE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Casa Serena v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: External store client ────────────────────────────
    tracing::info!(provider = %config.store.provider, "Connecting store client...");
    let store = guesthouse_store::provider::StoreManager::new(&config.store)?;

    // ── Step 2: Change feed ──────────────────────────────────────
    let feed = Arc::new(guesthouse_realtime::feed::ChangeFeed::new(
        config.realtime.channel_capacity,
    ));

    // ── Step 3: Notification forwarders + dispatcher ─────────────
    let http = reqwest::Client::new();
    let whatsapp = guesthouse_notify::whatsapp::WhatsAppForwarder::new(
        config.notify.whatsapp.clone(),
        http.clone(),
    );
    let push = guesthouse_notify::push::PushForwarder::new(
        config.notify.push.clone(),
        http,
        Arc::new(store.clone()),
    );
    let (dispatcher, dispatcher_handle) = guesthouse_notify::dispatcher::NotificationDispatcher::spawn(
        whatsapp.clone(),
        push.clone(),
        config.notify.queue_capacity,
    );
    tracing::info!("Notification dispatcher started");

    // ── Step 4: Services ─────────────────────────────────────────
    let booking_service = Arc::new(guesthouse_service::booking::service::BookingService::new(
        store.clone(),
        Arc::clone(&feed),
        dispatcher,
    ));
    let admin_service = Arc::new(guesthouse_service::admin::service::AdminService::new(
        store.clone(),
        Arc::clone(&feed),
        config.admin.clone(),
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = guesthouse_api::state::AppState {
        config: Arc::new(config.clone()),
        store,
        feed,
        booking_service,
        admin_service,
        whatsapp: Arc::new(whatsapp),
        push: Arc::new(push),
    };

    let app = guesthouse_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Casa Serena server listening on {addr}");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // The dispatcher's queue sender lives inside the services dropped
    // with the router; once they are gone the worker drains and exits.
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let _ = tokio::time::timeout(grace, dispatcher_handle).await;

    tracing::info!("Casa Serena server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
