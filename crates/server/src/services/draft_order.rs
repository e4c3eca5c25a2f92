//! Order → Shopify draft order relay.
//!
//! Under the `create_first` customer policy this is a two-step saga:
//!
//! 1. Create a customer with a generated placeholder email. Failure is
//!    absorbed and recorded as a failed [`CustomerLink`].
//! 2. Create the draft order, referencing the customer only if step 1
//!    succeeded. Always attempted.
//!
//! The other policies skip step 1.

use chrono::Utc;
use draft_order_core::{
    CustomerLink, CustomerPolicy, DraftOrderCreated, DraftOrderPolicy, OrderInput,
    build_customer_request, build_draft_order,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::shopify::ShopifyClient;

/// Relays one order to Shopify.
#[derive(Debug, Clone, Copy)]
pub struct DraftOrderService<'a> {
    shopify: &'a ShopifyClient,
    policy: &'a DraftOrderPolicy,
}

impl<'a> DraftOrderService<'a> {
    #[must_use]
    pub const fn new(shopify: &'a ShopifyClient, policy: &'a DraftOrderPolicy) -> Self {
        Self { shopify, policy }
    }

    /// Create the draft order (and customer, if the policy asks for one).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Rejected` if Shopify rejects the draft order, or
    /// `AppError::Shopify` on transport/parse failure. Customer-creation
    /// failures never surface here.
    #[instrument(
        skip(self, order),
        fields(order_id = order.order_id.as_deref().unwrap_or(""), policy = %self.policy.customer)
    )]
    pub async fn relay(&self, order: &OrderInput) -> Result<DraftOrderCreated, AppError> {
        let link = match self.policy.customer {
            CustomerPolicy::CreateFirst => Some(self.link_customer(order).await),
            CustomerPolicy::Validated | CustomerPolicy::Fallback { .. } => None,
        };

        let request = build_draft_order(order, self.policy, link, Utc::now());

        let draft = self
            .shopify
            .create_draft_order(&request)
            .await
            .map_err(|e| {
                let echo = self
                    .policy
                    .echo_request_on_error
                    .then(|| serde_json::to_value(&request).ok())
                    .flatten();
                AppError::from(e).with_request(echo)
            })?;

        let created = DraftOrderCreated::new(draft.id, draft.name);
        Ok(match link {
            Some(link) => created.with_customer(link),
            None => created,
        })
    }

    /// Step 1 of the saga. Never fails; a failure yields an unlinked result.
    async fn link_customer(&self, order: &OrderInput) -> CustomerLink {
        let request = build_customer_request(order, self.shopify.store(), Uuid::new_v4());

        match self.shopify.create_customer(&request).await {
            Ok(customer) => CustomerLink::created(customer.id),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Customer creation failed; continuing without a customer"
                );
                CustomerLink::failed()
            }
        }
    }
}
