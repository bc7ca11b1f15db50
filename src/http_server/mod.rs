//! # HTTP Server Module
//!
//! Wraps the product router with the welcome route, the JSON 404 fallback,
//! request tracing and CORS, and runs it on a tokio listener.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/api/products/*` - Product catalog

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
