//! # Auth Gate
//!
//! Static shared-secret check for mutating routes. The `x-api-key` header
//! must equal the configured secret; anything else stops the request with
//! `ApiError::Unauthorized` before the handler runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::errors::{ApiError, ApiResult};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Holds the digest of the configured secret
#[derive(Clone)]
pub struct ApiKeyGate {
    expected: [u8; 32],
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate").finish_non_exhaustive()
    }
}

impl ApiKeyGate {
    pub fn new(secret: &str) -> Self {
        Self {
            expected: digest(secret),
        }
    }

    /// Check a presented key.
    ///
    /// Digests are compared in constant time so neither content nor length
    /// of the secret leaks through timing.
    pub fn check(&self, presented: Option<&str>) -> ApiResult<()> {
        let presented = presented.ok_or(ApiError::Unauthorized)?;
        if bool::from(digest(presented)[..].ct_eq(&self.expected[..])) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    /// Check the key carried in request headers
    pub fn check_headers(&self, headers: &HeaderMap) -> ApiResult<()> {
        self.check(headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()))
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Middleware form of the gate, for `route_layer`
pub async fn require_api_key(
    State(gate): State<Arc<ApiKeyGate>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate.check_headers(request.headers())?;
    Ok(next.run(request).await)
}
