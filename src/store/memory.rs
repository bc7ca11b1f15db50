//! # In-Memory Store

use std::sync::RwLock;

use crate::catalog::Product;

use super::backend::ProductStore;
use super::errors::{StoreError, StoreResult};

/// Store holding the collection for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

impl ProductStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Product>> {
        let guard = self.products.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        let mut guard = self.products.write().map_err(|_| StoreError::LockPoisoned)?;
        *guard = products.to_vec();
        Ok(())
    }
}
