//! # Catalog Domain
//!
//! The product entity, the validation gate that guards every mutation,
//! and the sample data a fresh catalog starts with.

pub mod product;
pub mod sample;
pub mod validation;

pub use product::{Product, ProductInput};
pub use sample::sample_products;
pub use validation::{validate_product, ValidationMode};
