//! Product route handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use recircuit_core::Product;
use recircuit_core::api::ProductFilter;
use recircuit_core::types::ProductId;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List products matching the query filters.
///
/// Every provided filter field must match; an empty query returns the
/// whole catalog. A query string that fails the contract (e.g. a
/// non-numeric `minPrice`) is a 400, matching the original route's
/// behavior.
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<ProductFilter>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(filter) = query.map_err(|e| {
        tracing::debug!(error = %e, "Rejected product query");
        AppError::validation("Invalid query parameters")
    })?;

    Ok(Json(state.storage().list_products(&filter)))
}

/// Fetch a single product by id.
///
/// A non-numeric id can't name any product, so it is reported the same
/// way as a missing one.
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id.map_err(|_| AppError::NotFound("Product not found".to_owned()))?;

    state
        .storage()
        .product(ProductId::new(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))
}
