//! Outbound Shopify customer (REST `customers.json` body).

use serde::Serialize;

/// Request body for `POST /admin/api/{version}/customers.json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerCreateRequest {
    pub customer: NewCustomer,
}

/// Customer fields sent on creation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    /// Generated placeholder address; Shopify requires a unique one.
    pub email: String,
    pub note: String,
}
