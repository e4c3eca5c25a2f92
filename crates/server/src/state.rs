//! Application state shared across handlers.

use std::sync::Arc;

use draft_order_core::DraftOrderPolicy;

use crate::config::{MissingSetting, RelayConfig};
use crate::shopify::{ShopifyClient, ShopifyError};

/// Application state shared across all handlers.
///
/// Immutable after construction; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    policy: DraftOrderPolicy,
    /// `Err` when credentials are missing; requests then fail with a 500
    /// naming the missing setting.
    shopify: Result<ShopifyClient, MissingSetting>,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Missing Shopify credentials are tolerated (and logged); malformed ones
    /// are not.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError` if the Shopify client cannot be built from
    /// settings that are present.
    pub fn new(config: RelayConfig) -> Result<Self, ShopifyError> {
        let shopify = match config.shopify.credentials() {
            Ok(_) => Ok(ShopifyClient::new(&config.shopify)?),
            Err(missing) => {
                tracing::warn!(%missing, "Shopify client disabled; draft order requests will fail");
                Err(missing)
            }
        };

        Ok(Self {
            inner: Arc::new(AppStateInner {
                policy: config.policy,
                shopify,
            }),
        })
    }

    #[must_use]
    pub fn policy(&self) -> &DraftOrderPolicy {
        &self.inner.policy
    }

    /// Returns the Shopify client.
    ///
    /// # Errors
    ///
    /// Returns the missing setting when the client could not be configured.
    pub fn shopify(&self) -> Result<&ShopifyClient, MissingSetting> {
        self.inner.shopify.as_ref().map_err(|missing| *missing)
    }
}
