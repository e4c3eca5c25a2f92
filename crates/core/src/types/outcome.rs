//! Results of the relay steps.

use serde::{Deserialize, Serialize};

/// Outcome of the customer-creation step that precedes the draft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLink {
    /// Id of the created customer, `None` when creation failed.
    pub customer_id: Option<u64>,
    /// Whether the customer was created.
    #[serde(rename = "customer_created")]
    pub succeeded: bool,
}

impl CustomerLink {
    #[must_use]
    pub const fn created(customer_id: u64) -> Self {
        Self {
            customer_id: Some(customer_id),
            succeeded: true,
        }
    }

    #[must_use]
    pub const fn failed() -> Self {
        Self {
            customer_id: None,
            succeeded: false,
        }
    }
}

/// Success payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrderCreated {
    pub success: bool,
    pub draft_order_id: u64,
    /// Shopify's display name for the draft order (e.g. `#D12`).
    pub order_number: String,
    /// Present only when a customer-creation step ran.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerLink>,
}

impl DraftOrderCreated {
    #[must_use]
    pub const fn new(draft_order_id: u64, order_number: String) -> Self {
        Self {
            success: true,
            draft_order_id,
            order_number,
            customer: None,
        }
    }

    #[must_use]
    pub fn with_customer(mut self, link: CustomerLink) -> Self {
        self.customer = Some(link);
        self
    }
}
