//! # HTTP Server
//!
//! Combines the product routes with the outer layers and serves them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::rest_api::{product_routes, ApiError, ApiKeyGate, ProductHandler};

use super::config::HttpServerConfig;

const WELCOME: &str = "Welcome to the Product API! Use /api/products to interact with data.";

/// HTTP server for the product catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around a handler and the API key gate
    pub fn new(config: HttpServerConfig, handler: ProductHandler, gate: ApiKeyGate) -> Self {
        let router = Self::build_router(&config, Arc::new(handler), Arc::new(gate));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        handler: Arc<ProductHandler>,
        gate: Arc<ApiKeyGate>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        warn!(origin = %s, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(welcome_handler))
            .nest("/api", product_routes(handler, gate))
            .fallback(route_not_found)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "product API listening");
        info!("routes: GET /, GET|POST /api/products, GET /api/products/search, GET /api/products/stats, GET|PUT|DELETE /api/products/:id");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn welcome_handler() -> &'static str {
    WELCOME
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
