//! Shopify Admin REST response types.
//!
//! Only the fields the relay reads are modeled; Shopify returns many more.

use serde::Deserialize;

// =============================================================================
// Draft Orders
// =============================================================================

/// `{"draft_order": {...}}` response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct DraftOrderEnvelope {
    pub draft_order: DraftOrderSummary,
}

/// Created draft order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftOrderSummary {
    /// Numeric draft order ID.
    pub id: u64,
    /// Display name (e.g., `#D12`).
    pub name: String,
}

// =============================================================================
// Customers
// =============================================================================

/// `{"customer": {...}}` response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct CustomerEnvelope {
    pub customer: CustomerSummary,
}

/// Created customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerSummary {
    /// Numeric customer ID.
    pub id: u64,
}
