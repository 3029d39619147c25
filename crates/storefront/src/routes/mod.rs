//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /api/products           - Catalog listing with filters
//!                                (?search=&category=&minPrice=&maxPrice=&condition=)
//! GET  /api/products/{id}      - Product detail
//!
//! # Auth
//! POST /api/auth/login         - Login with phone + password
//! POST /api/auth/register      - Create an account
//! POST /api/auth/logout        - Drop the session
//!
//! # Orders (require auth)
//! GET  /api/orders             - The caller's order history
//! POST /api/orders             - Place an order for the caller
//! ```

pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", get(orders::index).post(orders::create))
}

/// Assemble all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/auth", auth_routes())
        .nest("/api/orders", order_routes())
}
