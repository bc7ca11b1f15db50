//! Sample catalog used to seed the in-memory store and by `init`.

use super::product::{Product, ProductInput};

/// The three products a fresh catalog starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::create(ProductInput {
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        }),
        Product::create(ProductInput {
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        }),
        Product::create(ProductInput {
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        }),
    ]
}
