//! Request/response contracts shared by the server and the client.
//!
//! These are the wire shapes for every endpoint: the server deserializes
//! them out of query strings and JSON bodies, the client serializes them
//! back. Keeping both sides on one definition is what the original shared
//! contract layer bought, and it is kept here.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cart::Cart;
use crate::order::OrderItem;
use crate::types::{Condition, Rupees};

/// Treat an empty query value (`?category=`) as absent rather than as a
/// filter for the empty string. The UI sends every key on every request
/// and leaves unused ones blank.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Catalog query for `GET /api/products`.
///
/// Every provided field must match (logical AND). Doubles as the storage
/// layer's filter input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive substring match against product name or brand.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub search: Option<String>,
    /// Exact category match; `"All"` means no category filter.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    /// Inclusive lower bound on price.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_price: Option<Rupees>,
    /// Inclusive upper bound on price.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_price: Option<Rupees>,
    /// Exact condition grade match.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub condition: Option<Condition>,
}

impl ProductFilter {
    /// A filter that matches everything.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            condition: None,
        }
    }
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub phone: String,
    pub password: String,
    pub name: String,
}

/// Body for `POST /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Denormalized line-item snapshots taken from the cart.
    pub items: Vec<OrderItem>,
    pub total: Rupees,
    /// Free-text shipping address.
    pub address: String,
}

impl CreateOrderRequest {
    /// Snapshot a cart into an order payload.
    ///
    /// Each cart item becomes a `{productId, name, quantity, price}`
    /// snapshot and the total is recomputed from the cart, so the payload
    /// is self-consistent regardless of what the caller's UI displayed.
    #[must_use]
    pub fn from_cart(cart: &Cart, address: impl Into<String>) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| OrderItem {
                product_id: item.product.id,
                name: item.product.name.clone(),
                quantity: item.quantity,
                price: item.product.price,
            })
            .collect();

        Self {
            items,
            total: cart.total(),
            address: address.into(),
        }
    }
}

/// Error response body for every non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    /// Set only for field-level validation failures (e.g. `"phone"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    /// An error body with just a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// An error body pointing at a specific request field.
    #[must_use]
    pub fn field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}
