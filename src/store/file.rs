//! # JSON File Store
//!
//! The collection is a single pretty-printed JSON array. Every `save`
//! rewrites the whole file; every `load` reads it back in full.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::catalog::Product;

use super::backend::ProductStore;
use super::errors::{StoreError, StoreResult};

/// File-backed product store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, e: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display_path(),
            message: e.to_string(),
        }
    }
}

impl ProductStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Product>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // Nothing written yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            path: self.display_path(),
            message: e.to_string(),
        })
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let data = serde_json::to_vec_pretty(products)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, data).map_err(|e| self.io_error(e))
    }
}
