//! Shopify Admin REST API client.
//!
//! # Security
//!
//! The access token grants write access to draft orders and customers. It is
//! held as a `SecretString` in configuration and only ever leaves the process
//! in the `X-Shopify-Access-Token` header.
//!
//! # Architecture
//!
//! - Plain REST (`draft_orders.json`, `customers.json`) via `reqwest`
//! - One POST per call; no retries, no rate-limit backoff
//! - Non-2xx responses are surfaced with the raw body so callers can relay it
//!
//! # Example
//!
//! ```rust,ignore
//! use draft_order_server::shopify::ShopifyClient;
//!
//! let client = ShopifyClient::new(&config.shopify)?;
//! let draft = client.create_draft_order(&request).await?;
//! println!("{} {}", draft.id, draft.name);
//! ```

mod client;
pub mod types;

pub use client::ShopifyClient;
pub use types::{CustomerSummary, DraftOrderSummary};

use thiserror::Error;

use crate::config::MissingSetting;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Store domain or access token is not configured.
    #[error("Not configured: {0}")]
    NotConfigured(#[from] MissingSetting),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The access token cannot be sent as a header value.
    #[error("Access token contains characters not allowed in a header")]
    InvalidToken,

    /// HTTP request failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}
