//! Submit an order file to Shopify, bypassing the HTTP layer.

use std::path::Path;

use draft_order_core::DraftOrderPolicy;
use draft_order_server::RelayConfig;
use draft_order_server::services::DraftOrderService;
use draft_order_server::shopify::ShopifyClient;

/// Run the full relay flow for an order file and print the result.
///
/// # Errors
///
/// Returns an error if Shopify credentials are missing, the file cannot be
/// read, or Shopify rejects the draft order.
#[allow(clippy::print_stdout)]
pub async fn run(
    file: &Path,
    config: &RelayConfig,
    policy: &DraftOrderPolicy,
) -> Result<(), Box<dyn std::error::Error>> {
    config.shopify.credentials()?;
    let order = super::read_order(file).await?;

    let client = ShopifyClient::new(&config.shopify)?;
    tracing::info!(store = client.store(), policy = %policy.customer, "Submitting draft order");

    let created = DraftOrderService::new(&client, policy).relay(&order).await?;

    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}
