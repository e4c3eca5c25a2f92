//! CLI command implementations.

pub mod preview;
pub mod submit;

use std::path::Path;

use draft_order_core::OrderInput;

/// Read and parse an order payload file.
///
/// An empty file is an empty order, matching the HTTP endpoint.
async fn read_order(path: &Path) -> Result<OrderInput, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    let body = tokio::fs::read(path).await?;
    let order = OrderInput::from_slice(&body)?;
    tracing::info!(path = %path.display(), order_id = ?order.order_id, "Loaded order");
    Ok(order)
}
