//! # Product REST API
//!
//! The request pipeline for `/api/products`:
//!
//! ```text
//! route -> [auth gate] -> [validation gate] -> handler -> error responder
//! ```
//!
//! Gates and handlers return `ApiResult`; only `ApiError`'s `IntoResponse`
//! turns a failure into an HTTP response.

pub mod errors;
pub mod gates;
pub mod handler;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use gates::{ApiKeyGate, API_KEY_HEADER};
pub use handler::ProductHandler;
pub use parser::{ListQuery, SearchQuery, DEFAULT_LIMIT};
pub use response::{ListResponse, SearchResponse, SingleResponse, StatsResponse};
pub use server::product_routes;
