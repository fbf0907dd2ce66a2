use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{ORIGIN, REFERER};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::AccessPolicy;
use crate::presentation::handlers::ApiError;

pub const EXTENSION_TOKEN_HEADER: &str = "x-extension-token";

/// Rejects requests the [`AccessPolicy`] does not allow with 403.
pub async fn access_guard_middleware(
    State(policy): State<Arc<AccessPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request.headers();
    let origin = headers
        .get(ORIGIN)
        .or_else(|| headers.get(REFERER))
        .and_then(|v| v.to_str().ok());
    let token = headers
        .get(EXTENSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if !policy.is_allowed(origin, token) {
        tracing::warn!(origin = origin.unwrap_or("<none>"), "Access denied");
        return ApiError::Forbidden.into_response();
    }

    next.run(request).await
}
