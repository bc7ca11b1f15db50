//! product-catalog - a small HTTP CRUD API for a product catalog
//!
//! Requests flow through the router, the auth and validation gates, the
//! product handler and, on failure, the single error responder. Products
//! live in a pluggable whole-collection store (memory or JSON file).

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod rest_api;
pub mod store;
