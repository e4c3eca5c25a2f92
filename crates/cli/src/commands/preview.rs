//! Print the Shopify request bodies an order would produce, offline.

use std::path::Path;

use chrono::Utc;
use draft_order_core::{
    CustomerPolicy, DraftOrderPolicy, build_customer_request, build_draft_order,
};
use serde_json::json;
use uuid::Uuid;

/// Store domain used for placeholder emails when none is configured.
const PREVIEW_STORE: &str = "your-store.myshopify.com";

/// Preview the outbound requests for an order file.
///
/// Under the create-first policy the customer request is shown as well; the
/// draft order is shown without a customer since no id exists yet.
///
/// # Errors
///
/// Returns an error if the file is missing or not a JSON object.
#[allow(clippy::print_stdout)]
pub async fn run(
    file: &Path,
    policy: &DraftOrderPolicy,
    store: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = super::read_order(file).await?;

    let customer_request = matches!(policy.customer, CustomerPolicy::CreateFirst).then(|| {
        build_customer_request(&order, store.unwrap_or(PREVIEW_STORE), Uuid::new_v4())
    });
    let draft_order_request = build_draft_order(&order, policy, None, Utc::now());

    let output = json!({
        "policy": policy.customer.name(),
        "customer_request": customer_request,
        "draft_order_request": draft_order_request,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
