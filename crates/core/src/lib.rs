//! Draft Order Relay Core - order payload types and transformation.
//!
//! This crate provides the types shared by every draft-order-relay component:
//! - `server` - HTTP service that relays order payloads to Shopify
//! - `cli` - Operator tools for previewing and submitting orders
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no environment access. Turning an [`OrderInput`] into a
//! [`DraftOrderRequest`] is deterministic given a [`DraftOrderPolicy`], an
//! optional customer link and a timestamp, which keeps it testable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Inbound order records, outbound draft-order records, policies,
//!   email and price newtypes
//! - [`transform`] - Builds the outbound draft order from an inbound order

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod transform;
pub mod types;

pub use transform::{
    DEFAULT_CUSTOMER_NAME, DEFAULT_PRODUCT_TITLE, build_customer_request, build_draft_order,
    placeholder_email,
};
pub use types::*;
