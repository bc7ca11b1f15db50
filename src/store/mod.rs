//! # Product Store
//!
//! The storage collaborator behind the API. A store holds one collection
//! of products and only knows how to hand out a snapshot of it and how to
//! replace it wholesale.
//!
//! Two backends:
//! - `JsonFileStore` - pretty-printed JSON array on disk
//! - `MemoryStore` - process-lifetime vector

mod backend;
mod errors;
mod file;
mod memory;

pub use backend::{ProductStore, StorageBackendKind};
pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
