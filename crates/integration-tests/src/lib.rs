//! Integration tests for the draft order relay.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p draft-order-integration-tests
//! ```
//!
//! No network or credentials are needed: each test starts a `wiremock`
//! server standing in for the Shopify Admin API and drives the axum router
//! in-process with `tower::ServiceExt::oneshot`.
//!
//! # Test Categories
//!
//! - `draft_order_api` - HTTP surface: methods, CORS, error envelope
//! - `customer_saga` - create-first customer policy
