//! HTTP route handlers for the relay.
//!
//! # Route Structure
//!
//! ```text
//! GET     /health            - Liveness check
//!
//! POST    /api/draft-order   - Relay an order to Shopify as a draft order
//! OPTIONS /api/draft-order   - CORS preflight (200, empty body)
//! *       /api/draft-order   - 405 with JSON error envelope
//! ```

pub mod draft_order;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{cors_headers_middleware, request_id_middleware};
use crate::state::AppState;

/// Path of the order endpoint.
pub const DRAFT_ORDER_PATH: &str = "/api/draft-order";

/// Largest accepted order body. Orders carry file metadata, not file contents.
pub const MAX_ORDER_BODY_BYTES: usize = 1024 * 1024;

/// Create the order endpoint routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        DRAFT_ORDER_PATH,
        post(draft_order::create)
            .options(draft_order::preflight)
            .fallback(draft_order::method_not_allowed)
            .layer(DefaultBodyLimit::max(MAX_ORDER_BODY_BYTES))
            .layer(middleware::from_fn(cors_headers_middleware)),
    )
}

/// Build the full application router with tracing and request IDs.
///
/// Sentry layers are added by the binary, outside this router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not call Shopify.
async fn health() -> &'static str {
    "ok"
}
