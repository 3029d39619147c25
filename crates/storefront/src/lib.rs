//! ReCircuit Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused. The router assembled by [`app`]
//! is exactly what the binary serves.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router, middleware included.
///
/// Used by both the binary and the integration tests, so tests exercise
/// the same stack that production serves.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The store is in-process, so
/// there is no separate readiness dependency to probe.
async fn health() -> &'static str {
    "ok"
}
