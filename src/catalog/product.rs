//! # Product Entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product as stored and returned by the API.
///
/// Field names follow the JSON wire format (`inStock` is camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// The five business fields of a product, as accepted by the validation gate.
///
/// There is no `id` here: ids are assigned by the catalog, never by clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Create a product from validated input under a fresh UUID v4 id.
    pub fn create(input: ProductInput) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Create a product from validated input under the given id.
    pub fn with_id(id: impl Into<String>, input: ProductInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Replace every business field. The id never changes.
    pub fn replace(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }

    /// Case-insensitive category equality.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
