//! # REST API Errors
//!
//! The closed error taxonomy of the API and the single place where errors
//! become HTTP responses.

use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::validation::ValidationError;
use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Referenced product or route does not exist
    #[error("{0}")]
    NotFound(String),

    /// Payload or query rejected by validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Missing or wrong API key
    #[error("Unauthorized: Invalid API key")]
    Unauthorized,

    /// Path, query or body the extractors could not read
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Known route, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Product lookup miss
    pub fn product_not_found() -> Self {
        ApiError::NotFound("Product not found".to_string())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Rejected { status, .. } => *status,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error kind reported in the `error` field of the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NotFoundError",
            ApiError::Validation(_) => "ValidationError",
            ApiError::Unauthorized => "AuthError",
            ApiError::Rejected { status, .. } if status.is_server_error() => "InternalError",
            ApiError::Rejected { .. } => "ValidationError",
            ApiError::MethodNotAllowed => "MethodNotAllowedError",
            ApiError::Store(_) | ApiError::Internal(_) => "InternalError",
        }
    }

    /// Message safe to send to clients. Server-side detail stays in the log.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.kind(),
            message: err.public_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(kind = self.kind(), status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(kind = self.kind(), status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
