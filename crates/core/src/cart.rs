//! Client-side cart state container.
//!
//! The cart is browser-session state: it never touches the server until
//! checkout converts it into an order payload. Persistence (and its
//! corrupt-data fallback) lives in the client crate; this type is the pure
//! state machine over it.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{ProductId, Rupees};

/// A product in the cart together with its chosen quantity.
///
/// The product fields are flattened on the wire, so the persisted payload
/// is a product object with one extra `quantity` key - the same shape the
/// web client kept in localStorage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// An ordered collection of cart items.
///
/// Items keep insertion order; adding an already-present product bumps its
/// quantity instead of appending a second entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the quantity if the product is already in the cart,
    /// otherwise appends it with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the item with `id`, if present.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.product.id != id);
    }

    /// Set the quantity for the item with `id`.
    ///
    /// A quantity below 1 is a no-op (removal is explicit via [`remove`]);
    /// an id not in the cart is also a no-op.
    ///
    /// [`remove`]: Self::remove
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of unit price times quantity over all items.
    #[must_use]
    pub fn total(&self) -> Rupees {
        self.items.iter().map(|item| item.product.price * item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::Condition;

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: String::new(),
            price: Rupees::new(price),
            original_price: Rupees::new(price * 2),
            category: "Phones".to_owned(),
            brand: "Apple".to_owned(),
            condition: Condition::Good,
            condition_score: 85,
            warranty_months: 6,
            images: Vec::new(),
            specs: BTreeMap::new(),
            stock: 3,
            is_featured: false,
        }
    }

    #[test]
    fn add_twice_merges_into_one_entry() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.add(product(1, "iPhone 13 Pro", 45999));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn set_quantity_below_one_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.set_quantity(ProductId::new(1), 0);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.set_quantity(ProductId::new(1), 4);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn set_quantity_for_unknown_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.set_quantity(ProductId::new(99), 5);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn remove_filters_by_id() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.add(product(2, "OnePlus 9 Pro", 28999));
        cart.remove(ProductId::new(1));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, ProductId::new(2));
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.add(product(2, "Sony WH-1000XM4", 14999));
        cart.add(product(2, "Sony WH-1000XM4", 14999));

        assert_eq!(cart.total(), Rupees::new(75997));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Rupees::ZERO);
    }

    #[test]
    fn serializes_as_flat_item_array() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));

        let json = serde_json::to_value(&cart).unwrap();
        // Array of product objects with one extra `quantity` key.
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "iPhone 13 Pro");
        assert_eq!(json[0]["quantity"], 1);
    }

    #[test]
    fn roundtrips_through_json() {
        let mut cart = Cart::new();
        cart.add(product(1, "iPhone 13 Pro", 45999));
        cart.add(product(2, "Sony WH-1000XM4", 14999));
        cart.set_quantity(ProductId::new(2), 2);

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
