//! Shared helpers: a mock Shopify and an in-process relay.

#![allow(dead_code, clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
    response::Response,
};
use draft_order_server::{AppState, RelayConfig, app};
use serde_json::{Value, json};
use wiremock::matchers::{header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "shpat_k3Jd9Qx7LmP2vR8tY4wZ6nB1";
pub const STORE: &str = "relay-test.myshopify.com";
pub const DRAFT_ORDERS_PATH: &str = "/admin/api/2024-04/draft_orders.json";
pub const CUSTOMERS_PATH: &str = "/admin/api/2024-04/customers.json";

/// Environment pointing the relay at `mock`, plus any overrides.
pub fn env_for(mock: &MockServer, overrides: &[(&str, &str)]) -> HashMap<String, String> {
    let mut env: HashMap<String, String> = [
        ("SHOPIFY_STORE", STORE),
        ("SHOPIFY_ADMIN_TOKEN", TOKEN),
        ("SHOPIFY_API_BASE_URL", mock.uri().as_str()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        env.insert((*key).to_string(), (*value).to_string());
    }
    env
}

/// Build the relay router from an explicit environment.
pub fn relay(env: &HashMap<String, String>) -> Router {
    let config = RelayConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
    app(AppState::new(config).unwrap())
}

/// Relay wired to `mock` with default policy.
pub fn relay_for(mock: &MockServer) -> Router {
    relay(&env_for(mock, &[]))
}

/// Mount a successful draft order creation on `mock`.
pub async fn mount_draft_order_created(mock: &MockServer, id: u64, name: &str) {
    Mock::given(method("POST"))
        .and(path(DRAFT_ORDERS_PATH))
        .and(header_eq("X-Shopify-Access-Token", TOKEN))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draft_order": { "id": id, "name": name, "status": "open" }
        })))
        .mount(mock)
        .await;
}

pub fn post_order(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/draft-order")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: Method, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/draft-order")
        .body(body)
        .unwrap()
}

pub async fn response_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// JSON bodies of the requests `mock` received on `at`.
pub async fn received_bodies(mock: &MockServer, at: &str) -> Vec<Value> {
    mock.received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == at)
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}

/// A complete order as a storefront would send it.
pub fn sample_order() -> Value {
    json!({
        "order_id": "ORD-1001",
        "product_title": "Custom Tote Bag",
        "total_amount": 4500,
        "customer_info": {
            "email": "buyer@shop.jp",
            "recipient_name": "Hanako",
            "address": "1-2-3 Shibuya, Tokyo",
            "postal_code": "150-0002"
        },
        "selected_options": { "order_summary": "Navy / Large" },
        "uploaded_files": { "files": [{ "name": "front.png" }, { "name": "back.png" }] }
    })
}
