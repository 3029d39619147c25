//! Catalog seed data.
//!
//! The store ships with a fixed six-product catalog loaded at startup.
//! Ids are assigned by the store on insert, in list order.

use std::collections::BTreeMap;

use recircuit_core::types::{Condition, Rupees};

use super::NewProduct;

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// The seed catalog: 3 phones, 2 laptops, 1 accessory.
#[must_use]
pub fn products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "iPhone 13 Pro (Refurbished)".to_owned(),
            description: "128GB, Sierra Blue. Fully tested and certified. Minimal signs of wear."
                .to_owned(),
            price: Rupees::new(45999),
            original_price: Rupees::new(119_900),
            category: "Phones".to_owned(),
            brand: "Apple".to_owned(),
            condition: Condition::Excellent,
            condition_score: 95,
            warranty_months: 12,
            images: vec![
                "https://images.unsplash.com/photo-1632661674596-df8be070a5c5?auto=format&fit=crop&q=80&w=800"
                    .to_owned(),
            ],
            specs: specs(&[("ram", "6GB"), ("storage", "128GB"), ("processor", "A15 Bionic")]),
            stock: 5,
            is_featured: true,
        },
        NewProduct {
            name: "Samsung Galaxy S22 Ultra".to_owned(),
            description: "Phantom Black, 256GB. Excellent camera performance. S-Pen included."
                .to_owned(),
            price: Rupees::new(52999),
            original_price: Rupees::new(109_999),
            category: "Phones".to_owned(),
            brand: "Samsung".to_owned(),
            condition: Condition::Good,
            condition_score: 88,
            warranty_months: 6,
            images: vec![
                "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?auto=format&fit=crop&q=80&w=800"
                    .to_owned(),
            ],
            specs: specs(&[
                ("ram", "12GB"),
                ("storage", "256GB"),
                ("processor", "Snapdragon 8 Gen 1"),
            ]),
            stock: 3,
            is_featured: true,
        },
        NewProduct {
            name: "MacBook Air M1".to_owned(),
            description:
                "Space Grey, 8GB RAM, 256GB SSD. Best value laptop. Battery cycle count: 45."
                    .to_owned(),
            price: Rupees::new(55000),
            original_price: Rupees::new(99900),
            category: "Laptops".to_owned(),
            brand: "Apple".to_owned(),
            condition: Condition::Excellent,
            condition_score: 98,
            warranty_months: 12,
            images: vec![
                "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9?auto=format&fit=crop&q=80&w=800"
                    .to_owned(),
            ],
            specs: specs(&[("ram", "8GB"), ("storage", "256GB"), ("processor", "M1")]),
            stock: 8,
            is_featured: true,
        },
        NewProduct {
            name: "Dell XPS 13".to_owned(),
            description: "InfinityEdge display, lightweight and powerful. Ideal for professionals."
                .to_owned(),
            price: Rupees::new(48000),
            original_price: Rupees::new(110_000),
            category: "Laptops".to_owned(),
            brand: "Dell".to_owned(),
            condition: Condition::Fair,
            condition_score: 75,
            warranty_months: 3,
            images: vec![
                "https://images.unsplash.com/photo-1593642632823-8f78536788c6?auto=format&fit=crop&q=80&w=800"
                    .to_owned(),
            ],
            specs: specs(&[("ram", "16GB"), ("storage", "512GB"), ("processor", "Intel i7")]),
            stock: 2,
            is_featured: false,
        },
        NewProduct {
            name: "OnePlus 9 Pro".to_owned(),
            description: "Hasselblad Camera for Mobile. Fast charging. 120Hz Fluid Display."
                .to_owned(),
            price: Rupees::new(28999),
            original_price: Rupees::new(64999),
            category: "Phones".to_owned(),
            brand: "OnePlus".to_owned(),
            condition: Condition::Good,
            condition_score: 85,
            warranty_months: 6,
            images: vec![
                "https://images.unsplash.com/photo-1619948834614-4b53ef9173d1?auto=format&fit=crop&q=80&w=800"
                    .to_owned(),
            ],
            specs: specs(&[("ram", "8GB"), ("storage", "128GB"), ("processor", "Snapdragon 888")]),
            stock: 4,
            is_featured: false,
        },
        NewProduct {
            name: "Sony WH-1000XM4".to_owned(),
            description: "Industry-leading noise canceling. 30 hours battery life.".to_owned(),
            price: Rupees::new(14999),
            original_price: Rupees::new(29990),
            category: "Accessories".to_owned(),
            brand: "Sony".to_owned(),
            condition: Condition::Excellent,
            condition_score: 92,
            warranty_months: 6,
            images: vec![
                "https://images.unsplash.com/photo-1618366712010-f4ae9c647dcb?auto=format&fit=crop&q=80&w=800"
                    .to_owned(),
            ],
            specs: specs(&[("type", "Over-ear"), ("battery", "30h"), ("connectivity", "Bluetooth")]),
            stock: 10,
            is_featured: true,
        },
    ]
}

/// Demo account registered at startup so the store is usable out of the
/// box. The password goes through the normal registration path and is
/// hashed like any other.
pub const DEMO_PHONE: &str = "9876543210";
pub const DEMO_PASSWORD: &str = "trustycircuit";
pub const DEMO_NAME: &str = "Demo Shopper";

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn seed_has_six_products_in_three_categories() {
        let seed = products();
        assert_eq!(seed.len(), 6);

        let categories: BTreeSet<&str> = seed.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(
            categories,
            BTreeSet::from(["Phones", "Laptops", "Accessories"])
        );
        assert_eq!(seed.iter().filter(|p| p.category == "Phones").count(), 3);
    }

    #[test]
    fn every_seed_price_is_a_discount() {
        for product in products() {
            assert!(
                product.price <= product.original_price,
                "{} priced above original",
                product.name
            );
        }
    }

    #[test]
    fn scores_fit_the_grade_scale() {
        for product in products() {
            assert!(product.condition_score <= 100);
        }
    }
}
