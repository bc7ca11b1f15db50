//! # Product Handler
//!
//! Implements each catalog operation as load -> modify -> save against the
//! injected `ProductStore`. Handlers never cache the collection between
//! calls.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::catalog::{Product, ProductInput};
use crate::store::ProductStore;

use super::errors::{ApiError, ApiResult};
use super::parser::{ListQuery, SearchQuery, DEFAULT_LIMIT};
use super::response::ListResponse;

/// Catalog operations over a product store
#[derive(Debug, Clone)]
pub struct ProductHandler {
    store: Arc<dyn ProductStore>,
    default_limit: usize,
}

impl ProductHandler {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Override the page size used when a list request gives no `limit`
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Filter, then paginate. `total` counts matches before pagination.
    pub fn list(&self, query: &ListQuery) -> ApiResult<ListResponse<Product>> {
        let matches: Vec<Product> = self
            .store
            .load()?
            .into_iter()
            .filter(|p| query.category.as_deref().map_or(true, |c| p.in_category(c)))
            .filter(|p| query.name_terms.iter().all(|term| p.name_contains(term)))
            .collect();

        let total = matches.len();
        let data = matches
            .into_iter()
            .skip(query.start())
            .take(query.limit)
            .collect();

        debug!(total, page = query.page, limit = query.limit, "listed products");
        Ok(ListResponse::new(data, total, query.page, query.limit))
    }

    pub fn get(&self, id: &str) -> ApiResult<Product> {
        self.store
            .load()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(ApiError::product_not_found)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub fn create(&self, input: ProductInput) -> ApiResult<Product> {
        let mut products = self.store.load()?;
        let product = Product::create(input);
        products.push(product.clone());
        self.store.save(&products)?;

        info!(id = %product.id, "product created");
        Ok(product)
    }

    /// Full replace of every business field
    #[instrument(skip(self, input))]
    pub fn update(&self, id: &str, input: ProductInput) -> ApiResult<Product> {
        let mut products = self.store.load()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(ApiError::product_not_found)?;
        product.replace(input);
        let updated = product.clone();
        self.store.save(&products)?;

        info!("product updated");
        Ok(updated)
    }

    /// Remove a product and hand it back
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> ApiResult<Product> {
        let mut products = self.store.load()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(ApiError::product_not_found)?;
        let removed = products.remove(index);
        self.store.save(&products)?;

        info!("product deleted");
        Ok(removed)
    }

    /// Unpaginated name search
    pub fn search(&self, query: &SearchQuery) -> ApiResult<Vec<Product>> {
        Ok(self
            .store
            .load()?
            .into_iter()
            .filter(|p| p.name_contains(&query.name))
            .collect())
    }

    /// Product count per category over the whole collection
    pub fn stats(&self) -> ApiResult<BTreeMap<String, usize>> {
        let mut stats = BTreeMap::new();
        for product in self.store.load()? {
            *stats.entry(product.category).or_insert(0) += 1;
        }
        Ok(stats)
    }
}
