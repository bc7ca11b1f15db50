//! # Product Routes
//!
//! Axum routing for the product API. Mutating routes sit behind the auth
//! gate via `route_layer`; create and update run the validation gate
//! before touching the store.
//!
//! Extractors are taken as `Result` so their rejections, like unsupported
//! methods, come back as `ApiError` envelopes.
//!
//! | Method | Path | Gates |
//! |---|---|---|
//! | GET | `/products` | - |
//! | GET | `/products/search` | - |
//! | GET | `/products/stats` | - |
//! | GET | `/products/:id` | - |
//! | POST | `/products` | auth, validate |
//! | PUT | `/products/:id` | auth, validate |
//! | DELETE | `/products/:id` | auth |

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};

use crate::catalog::{validate_product, Product, ValidationMode};

use super::errors::{ApiError, ApiResult};
use super::gates::{require_api_key, ApiKeyGate};
use super::handler::ProductHandler;
use super::parser::{ListQuery, SearchQuery};
use super::response::{ListResponse, SearchResponse, SingleResponse, StatsResponse};

/// Shared state type
type HandlerState = Arc<ProductHandler>;

/// Build the product router. Paths are relative to the `/api` nest.
pub fn product_routes(handler: Arc<ProductHandler>, gate: Arc<ApiKeyGate>) -> Router {
    let public = Router::new()
        .route("/products", get(list_handler))
        .route("/products/search", get(search_handler))
        .route("/products/stats", get(stats_handler))
        .route("/products/:id", get(get_handler));

    let protected = Router::new()
        .route("/products", post(create_handler))
        .route("/products/:id", put(update_handler).delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(gate, require_api_key));

    public
        .merge(protected)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(handler)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// List products handler
async fn list_handler(
    State(handler): State<HandlerState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<ListResponse<Product>>> {
    let Query(params) = params?;
    let query = ListQuery::parse(&params, handler.default_limit())?;
    Ok(Json(handler.list(&query)?))
}

/// Name search handler
async fn search_handler(
    State(handler): State<HandlerState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<SearchResponse<Product>>> {
    let Query(params) = params?;
    let query = SearchQuery::parse(&params)?;
    Ok(Json(SearchResponse::new(handler.search(&query)?)))
}

/// Category counts handler
async fn stats_handler(State(handler): State<HandlerState>) -> ApiResult<Json<StatsResponse>> {
    Ok(Json(StatsResponse::new(handler.stats()?)))
}

/// Get single product handler
async fn get_handler(
    State(handler): State<HandlerState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SingleResponse<Product>>> {
    let Path(id) = id?;
    Ok(Json(SingleResponse::new(handler.get(&id)?)))
}

/// Create product handler
async fn create_handler(
    State(handler): State<HandlerState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<SingleResponse<Product>>)> {
    let body = body?;
    let input = validate_product(&body, ValidationMode::Create)?;
    let product = handler.create(input)?;
    Ok((StatusCode::CREATED, Json(SingleResponse::new(product))))
}

/// Update product handler
///
/// The id is resolved before the validation gate runs, so an unknown id is
/// a 404 whatever the body holds.
async fn update_handler(
    State(handler): State<HandlerState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<SingleResponse<Product>>> {
    let Path(id) = id?;
    handler.get(&id)?;
    let body = body?;
    let input = validate_product(&body, ValidationMode::Update)?;
    Ok(Json(SingleResponse::new(handler.update(&id, input)?)))
}

/// Delete product handler
async fn delete_handler(
    State(handler): State<HandlerState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SingleResponse<Product>>> {
    let Path(id) = id?;
    Ok(Json(SingleResponse::new(handler.delete(&id)?)))
}
