//! Permissive CORS headers for the order endpoint.
//!
//! The storefront posts orders from arbitrary origins (embedded widgets,
//! preview domains), so every response on the endpoint carries:
//! - `Access-Control-Allow-Origin: *`
//! - `Access-Control-Allow-Methods: POST, OPTIONS`
//! - `Access-Control-Allow-Headers: Content-Type`
//!
//! Headers are set on all responses, not only preflights, and regardless of
//! whether the request sent an `Origin` header.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

/// Add the CORS headers to the response.
pub async fn cors_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    response
}
