//! Storage repository for products, users, and orders.
//!
//! The [`Storage`] trait is the repository contract; [`MemStorage`] is the
//! process-lifetime in-memory implementation the storefront runs on today.
//! A persistent backend would implement the same trait behind the same
//! seam.
//!
//! Lookups return `Option` - an absent entity is a normal outcome, not an
//! error. Errors are reserved for contract violations such as a phone
//! number conflict on registration.

pub mod memory;
pub mod seed;

use std::collections::BTreeMap;

use thiserror::Error;

use recircuit_core::api::ProductFilter;
use recircuit_core::types::{Condition, Phone, ProductId, Rupees, UserId};
use recircuit_core::{Order, OrderItem, Product, User};

pub use memory::MemStorage;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Constraint violation (e.g. unique phone).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// A product without its id, as fed to seeding.
///
/// Mirrors the shape of [`Product`] minus the id; the store assigns ids
/// sequentially on insert.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Rupees,
    pub original_price: Rupees,
    pub category: String,
    pub brand: String,
    pub condition: Condition,
    pub condition_score: u8,
    pub warranty_months: u32,
    pub images: Vec<String>,
    pub specs: BTreeMap<String, String>,
    pub stock: u32,
    pub is_featured: bool,
}

/// Input for creating a user.
///
/// The password arrives already hashed; the repository never sees
/// plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub phone: Phone,
    pub password_hash: String,
    pub name: Option<String>,
}

/// Input for creating an order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total: Rupees,
    pub address: String,
}

/// Repository contract over products, users, and orders.
///
/// Operations are short map accesses, so the trait is synchronous; the
/// caller must not hold results across await points expecting them to
/// stay in sync with the store.
pub trait Storage: Send + Sync {
    /// All products satisfying every provided filter field, in id order.
    fn list_products(&self, filter: &ProductFilter) -> Vec<Product>;

    /// Exact id lookup; `None` when not found.
    fn product(&self, id: ProductId) -> Option<Product>;

    /// First user whose phone matches exactly; no normalization.
    fn user_by_phone(&self, phone: &Phone) -> Option<User>;

    /// User plus password hash, for credential verification only.
    fn credentials_by_phone(&self, phone: &Phone) -> Option<(User, String)>;

    /// Store a new user under the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] when the phone number is
    /// already registered.
    fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    /// All orders belonging to `user_id`, in id order.
    fn orders_for_user(&self, user_id: UserId) -> Vec<Order>;

    /// Store a new order under the next sequential id.
    ///
    /// Status starts as `Pending` and `created_at` is the current time.
    fn create_order(&self, new_order: NewOrder) -> Order;
}
