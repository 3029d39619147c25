//! In-memory storage implementation.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use recircuit_core::api::ProductFilter;
use recircuit_core::types::{OrderId, OrderStatus, Phone, ProductId, UserId};
use recircuit_core::{Order, Product, User};

use super::{NewOrder, NewProduct, NewUser, RepositoryError, Storage};

/// Internal record for a user; the hash never leaves this module except
/// through [`Storage::credentials_by_phone`].
#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<ProductId, Product>,
    users: BTreeMap<UserId, UserRecord>,
    orders: BTreeMap<OrderId, Order>,
    next_product_id: i32,
    next_user_id: i32,
    next_order_id: i32,
}

/// Process-lifetime in-memory store.
///
/// A single `RwLock` guards all three maps and their id counters, so each
/// repository operation is atomic. Nothing survives a restart.
#[derive(Debug)]
pub struct MemStorage {
    inner: RwLock<Inner>,
}

impl MemStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_product_id: 1,
                next_user_id: 1,
                next_order_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// Insert a product under the next sequential id.
    ///
    /// Inherent rather than on the trait: products are seeded at startup
    /// and there are no product write endpoints.
    pub fn insert_product(&self, new_product: NewProduct) -> Product {
        let mut inner = self.write();
        let id = ProductId::new(inner.next_product_id);
        inner.next_product_id += 1;

        let product = Product {
            id,
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            original_price: new_product.original_price,
            category: new_product.category,
            brand: new_product.brand,
            condition: new_product.condition,
            condition_score: new_product.condition_score,
            warranty_months: new_product.warranty_months,
            images: new_product.images,
            specs: new_product.specs,
            stock: new_product.stock,
            is_featured: new_product.is_featured,
        };
        inner.products.insert(id, product.clone());
        product
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `product` satisfies every provided filter field.
fn matches(filter: &ProductFilter, product: &Product) -> bool {
    if let Some(search) = &filter.search {
        let query = search.to_lowercase();
        let hit = product.name.to_lowercase().contains(&query)
            || product.brand.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }

    if let Some(category) = &filter.category {
        // "All" is the UI's everything-bucket, not a real category.
        if category != "All" && product.category != *category {
            return false;
        }
    }

    if let Some(min_price) = filter.min_price {
        if product.price < min_price {
            return false;
        }
    }

    if let Some(max_price) = filter.max_price {
        if product.price > max_price {
            return false;
        }
    }

    if let Some(condition) = filter.condition {
        if product.condition != condition {
            return false;
        }
    }

    true
}

impl Storage for MemStorage {
    fn list_products(&self, filter: &ProductFilter) -> Vec<Product> {
        self.read()
            .products
            .values()
            .filter(|product| matches(filter, product))
            .cloned()
            .collect()
    }

    fn product(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }

    fn user_by_phone(&self, phone: &Phone) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|record| record.user.phone == *phone)
            .map(|record| record.user.clone())
    }

    fn credentials_by_phone(&self, phone: &Phone) -> Option<(User, String)> {
        self.read()
            .users
            .values()
            .find(|record| record.user.phone == *phone)
            .map(|record| (record.user.clone(), record.password_hash.clone()))
    }

    fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut inner = self.write();

        if inner
            .users
            .values()
            .any(|record| record.user.phone == new_user.phone)
        {
            return Err(RepositoryError::Conflict(
                "phone number already registered".to_owned(),
            ));
        }

        let id = UserId::new(inner.next_user_id);
        inner.next_user_id += 1;

        let user = User {
            id,
            phone: new_user.phone,
            name: new_user.name,
            created_at: Utc::now(),
        };
        inner.users.insert(
            id,
            UserRecord {
                user: user.clone(),
                password_hash: new_user.password_hash,
            },
        );
        Ok(user)
    }

    fn orders_for_user(&self, user_id: UserId) -> Vec<Order> {
        self.read()
            .orders
            .values()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect()
    }

    fn create_order(&self, new_order: NewOrder) -> Order {
        let mut inner = self.write();
        let id = OrderId::new(inner.next_order_id);
        inner.next_order_id += 1;

        let order = Order {
            id,
            user_id: new_order.user_id,
            items: new_order.items,
            total: new_order.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            address: new_order.address,
        };
        inner.orders.insert(id, order.clone());
        order
    }
}
