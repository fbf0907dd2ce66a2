use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{make_request_span, request_id_middleware};
use crate::presentation::access::access_guard_middleware;
use crate::presentation::handlers::{
    feedback_handler, health_handler, index_handler, simplify_handler, word_info_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = Router::new()
        .route("/simplify", post(simplify_handler))
        .route("/word-info", get(word_info_handler))
        .route("/feedback", post(feedback_handler))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.access_policy),
            access_guard_middleware,
        ));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(api)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
