//! Business logic between route handlers and the Shopify client.

pub mod draft_order;

pub use draft_order::DraftOrderService;
