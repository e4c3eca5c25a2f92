//! Core types for the draft order relay.
//!
//! This module provides the inbound and outbound records plus type-safe
//! wrappers for the few values that carry validation rules.

pub mod customer;
pub mod draft_order;
pub mod email;
pub mod order;
pub mod outcome;
pub mod policy;
pub mod price;

pub use customer::{CustomerCreateRequest, NewCustomer};
pub use draft_order::{
    CustomerRecord, DraftOrder, DraftOrderRequest, LineItem, LineItemProperty, ShippingAddress,
};
pub use email::{CustomerEmail, CustomerEmailError, is_deliverable_email};
pub use order::{CustomerInfo, OrderInput, SelectedOptions, UploadedFiles};
pub use outcome::{CustomerLink, DraftOrderCreated};
pub use policy::{CustomerPolicy, DraftOrderPolicy};
pub use price::Price;
