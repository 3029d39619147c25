//! Product entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Condition, ProductId, Rupees};

/// A refurbished product in the catalog.
///
/// Products are created from the seed list at startup and are read-only
/// afterwards; there are no write endpoints for them.
///
/// `price <= original_price` is assumed for catalog data but not enforced
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID, assigned sequentially.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Selling price.
    pub price: Rupees,
    /// Original retail price, shown struck through.
    pub original_price: Rupees,
    /// Open category set; conventionally "Phones", "Laptops", "Accessories".
    pub category: String,
    pub brand: String,
    /// Coarse refurbishment grade.
    pub condition: Condition,
    /// 0-100 quality rating supplementing the grade.
    pub condition_score: u8,
    pub warranty_months: u32,
    /// Ordered list of image URIs.
    pub images: Vec<String>,
    /// Open key-value spec sheet (e.g. `ram`, `storage`, `processor`).
    pub specs: BTreeMap<String, String>,
    pub stock: u32,
    pub is_featured: bool,
}
