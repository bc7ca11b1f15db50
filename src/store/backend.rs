//! # Store Trait

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

use super::errors::StoreResult;

/// Whole-collection storage for products.
///
/// `load` returns a snapshot in insertion order; `save` replaces the
/// collection. Nothing ties a `load` to a later `save`, so two mutations
/// that interleave lose one of their writes.
pub trait ProductStore: Send + Sync + fmt::Debug {
    /// Read the full collection
    fn load(&self) -> StoreResult<Vec<Product>>;

    /// Overwrite the full collection
    fn save(&self, products: &[Product]) -> StoreResult<()>;
}

/// Which store backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// Collection lives for the process lifetime
    Memory,
    /// Collection is a JSON file on disk
    File,
}

impl fmt::Display for StorageBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendKind::Memory => write!(f, "memory"),
            StorageBackendKind::File => write!(f, "file"),
        }
    }
}

impl FromStr for StorageBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackendKind::Memory),
            "file" => Ok(StorageBackendKind::File),
            other => Err(format!(
                "Unknown storage backend '{}' (expected 'memory' or 'file')",
                other
            )),
        }
    }
}
