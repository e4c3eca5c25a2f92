//! REST client for the draft order and customer endpoints.

use std::sync::Arc;

use draft_order_core::{CustomerCreateRequest, DraftOrderRequest};
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;
use url::Url;

use super::ShopifyError;
use super::types::{CustomerEnvelope, CustomerSummary, DraftOrderEnvelope, DraftOrderSummary};
use crate::config::ShopifyConfig;

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin REST API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ShopifyClient {
    inner: Arc<ShopifyClientInner>,
}

struct ShopifyClientInner {
    client: reqwest::Client,
    store: String,
    /// `{base}/admin/api/{version}`, no trailing slash
    api_root: String,
}

impl ShopifyClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::NotConfigured` if the store or token is missing,
    /// `InvalidBaseUrl`/`InvalidToken` for malformed settings, or `Http` if the
    /// HTTP client fails to build.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let (store, token) = config.credentials()?;

        let base_url = config
            .api_base_url
            .clone()
            .unwrap_or_else(|| format!("https://{store}"));
        // Validate early so a typo fails at startup rather than per request
        Url::parse(&base_url)?;
        let api_root = format!(
            "{}/admin/api/{}",
            base_url.trim_end_matches('/'),
            config.api_version
        );

        let mut token_value =
            HeaderValue::from_str(token.expose_secret()).map_err(|_| ShopifyError::InvalidToken)?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ShopifyClientInner {
                client,
                store: store.to_string(),
                api_root,
            }),
        })
    }

    /// Get the store domain.
    #[must_use]
    pub fn store(&self) -> &str {
        &self.inner.store
    }

    /// Create a draft order.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Api` with the raw response body if Shopify
    /// rejects the request, `Http` on transport failure, or `Parse` if the
    /// response lacks `draft_order.id`/`draft_order.name`.
    #[instrument(skip(self, request), fields(store = %self.inner.store))]
    pub async fn create_draft_order(
        &self,
        request: &DraftOrderRequest,
    ) -> Result<DraftOrderSummary, ShopifyError> {
        let envelope: DraftOrderEnvelope = self.post("draft_orders", request).await?;
        tracing::info!(
            draft_order_id = envelope.draft_order.id,
            name = %envelope.draft_order.name,
            "Draft order created"
        );
        Ok(envelope.draft_order)
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Same as [`ShopifyClient::create_draft_order`].
    #[instrument(skip(self, request), fields(store = %self.inner.store))]
    pub async fn create_customer(
        &self,
        request: &CustomerCreateRequest,
    ) -> Result<CustomerSummary, ShopifyError> {
        let envelope: CustomerEnvelope = self.post("customers", request).await?;
        tracing::info!(customer_id = envelope.customer.id, "Customer created");
        Ok(envelope.customer)
    }

    /// POST a JSON body to `{api_root}/{resource}.json`.
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        resource: &str,
        body: &B,
    ) -> Result<T, ShopifyError> {
        let url = format!("{}/{resource}.json", self.inner.api_root);
        let response = self.inner.client.post(&url).json(body).send().await?;
        handle_response(response).await
    }
}

/// Parse a success body, or turn a failure status into `ShopifyError::Api`.
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ShopifyError> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        return serde_json::from_slice(&bytes)
            .map_err(|e| ShopifyError::Parse(format!("Failed to parse response: {e}")));
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::warn!(status = status.as_u16(), body = %body, "Shopify rejected request");

    Err(ShopifyError::Api {
        status: status.as_u16(),
        body,
    })
}

impl std::fmt::Debug for ShopifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyClient")
            .field("store", &self.inner.store)
            .field("api_root", &self.inner.api_root)
            .finish_non_exhaustive()
    }
}
