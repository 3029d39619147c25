//! ReCircuit Storefront - refurbished electronics store API.
//!
//! This binary serves the JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON-only surface for the SPA
//! - In-memory storage repository seeded with the fixed catalog
//! - Cookie sessions (tower-sessions, in-memory store) for auth state
//!
//! All data is process-lifetime only. A persistent backend would slot in
//! behind the `Storage` trait without touching the routes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use recircuit_storefront::config::StorefrontConfig;
use recircuit_storefront::services::auth::AuthService;
use recircuit_storefront::state::AppState;
use recircuit_storefront::storage::{MemStorage, seed};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recircuit_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the seeded store
    let storage = MemStorage::new();
    for product in seed::products() {
        storage.insert_product(product);
    }
    tracing::info!("Catalog seeded");

    // Demo account goes through the normal registration path
    match AuthService::new(&storage).register(
        seed::DEMO_PHONE,
        seed::DEMO_PASSWORD,
        Some(seed::DEMO_NAME.to_owned()),
    ) {
        Ok(user) => tracing::info!(user_id = %user.id, "Demo account registered"),
        Err(e) => tracing::warn!(error = %e, "Demo account not registered"),
    }

    let state = AppState::new(config.clone(), storage);
    let app = recircuit_storefront::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
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
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
