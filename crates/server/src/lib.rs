//! Draft order relay library.
//!
//! Accepts order payloads from a storefront and turns each one into a Shopify
//! draft order via the Admin REST API. Exposed as a library so the router can
//! be exercised in tests without binding a socket.
//!
//! # Security
//!
//! This crate holds a Shopify Admin API token with write access to draft
//! orders and customers. The token never appears in logs or responses.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;

pub use config::{ConfigError, MissingSetting, RelayConfig, ShopifyConfig};
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
