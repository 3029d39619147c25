//! Order route handlers.
//!
//! Both endpoints require an authenticated session. The caller's identity
//! always comes from the session, never from the request body, so one
//! user cannot create or read another user's orders.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use recircuit_core::Order;
use recircuit_core::api::CreateOrderRequest;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;
use crate::storage::NewOrder;

/// List the caller's orders.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.storage().orders_for_user(user.id)))
}

/// Place an order for the caller.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    payload: std::result::Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>)> {
    let Json(request) = payload.map_err(|_| AppError::validation("Invalid request body"))?;

    let order = state.storage().create_order(NewOrder {
        user_id: user.id,
        items: request.items,
        total: request.total,
        address: request.address,
    });

    tracing::info!(order_id = %order.id, user_id = %user.id, total = %order.total, "Order placed");
    Ok((StatusCode::CREATED, Json(order)))
}
