//! Order entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, ProductId, Rupees, UserId};

/// A line item captured at checkout time.
///
/// Deliberately denormalized: the name and unit price are snapshots taken
/// from the cart, so order history survives later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Unit price at the time of purchase.
    pub price: Rupees,
}

impl OrderItem {
    /// The line total for this item.
    #[must_use]
    pub fn line_total(&self) -> Rupees {
        self.price * self.quantity
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID, assigned sequentially.
    pub id: OrderId,
    /// The account that placed the order.
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total: Rupees,
    /// Always `Pending` at creation; advanced by fulfillment elsewhere.
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Free-text shipping address.
    pub address: String,
}
