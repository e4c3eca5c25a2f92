//! Correlation IDs for relayed orders.
//!
//! A failed relay is usually reported by the storefront long after the fact,
//! so every order request carries an ID that ties its log lines, its Sentry
//! event and the response the storefront saw. An inbound `x-request-id` from
//! the host or proxy is kept; otherwise a UUID is minted here.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag the request span and Sentry scope, then echo the ID on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let id = correlation_id(request.headers());

    Span::current().record("request_id", id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Inbound ID if it is usable text, else a fresh UUID.
fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("edge-7f3a"));
        assert_eq!(correlation_id(&headers), "edge-7f3a");
    }

    #[test]
    fn test_blank_or_missing_id_is_generated() {
        let generated = correlation_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&generated).is_ok());

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(Uuid::parse_str(&correlation_id(&headers)).is_ok());
    }
}
