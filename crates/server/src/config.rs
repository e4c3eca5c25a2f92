//! Relay configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Shopify (a missing value fails each request, not startup)
//! - `SHOPIFY_STORE` - Shop domain (e.g., your-store.myshopify.com). Falls back to `SHOP_URL`.
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token. Falls back to `ADMIN_TOKEN`.
//!
//! ## Optional
//! - `RELAY_HOST` - Bind address (default: 0.0.0.0)
//! - `RELAY_PORT` - Listen port (default: 3000)
//! - `SHOPIFY_API_VERSION` - REST API version (default: 2024-04)
//! - `SHOPIFY_API_BASE_URL` - Endpoint override (default: `https://{SHOPIFY_STORE}`)
//! - `SHOPIFY_TIMEOUT_SECS` - Outbound request timeout (default: 30)
//! - `DRAFT_ORDER_CUSTOMER_POLICY` - `validated`, `fallback` or `create_first` (default: validated)
//! - `DRAFT_ORDER_FALLBACK_EMAIL` - Email used by the `fallback` policy (default: no-reply@shopify.com)
//! - `DRAFT_ORDER_NOTIFY_CUSTOMER` - Let Shopify email the customer (default: false)
//! - `DRAFT_ORDER_LINE_ITEM_PROPERTIES` - Attach order details to the line item (default: true)
//! - `DRAFT_ORDER_STAMP_NOTE` - Append a timestamp to the note (default: true)
//! - `DRAFT_ORDER_SHIPPING_COUNTRY` - Shipping country code (default: JP)
//! - `DRAFT_ORDER_ECHO_REQUEST` - Echo the outbound body on rejection (default: false)
//! - `LOG_FORMAT` - `json` for structured logs (JSON is also used when `FLY_APP_NAME` is set)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT`, `SENTRY_SAMPLE_RATE`, `SENTRY_TRACES_SAMPLE_RATE`

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use draft_order_core::{CustomerPolicy, DraftOrderPolicy};
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_API_VERSION: &str = "2024-04";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.0;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "xxx",
    "todo",
    "insert",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// A setting the relay needs to reach Shopify is not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not configured")]
pub struct MissingSetting(pub &'static str);

/// Relay application configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shopify Admin API configuration
    pub shopify: ShopifyConfig,
    /// How orders are turned into draft orders
    pub policy: DraftOrderPolicy,
    /// Emit JSON logs instead of human-readable text
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shop domain without scheme (e.g., your-store.myshopify.com)
    pub store: Option<String>,
    /// Admin API access token
    pub access_token: Option<SecretString>,
    /// REST API version (e.g., 2024-04)
    pub api_version: String,
    /// Endpoint override; defaults to `https://{store}`
    pub api_base_url: Option<String>,
    /// Outbound request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_version", &self.api_version)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ShopifyConfig {
    /// Returns the shop domain and token, or the first one that is missing.
    ///
    /// # Errors
    ///
    /// Returns `MissingSetting` naming `SHOPIFY_STORE` or `SHOPIFY_ADMIN_TOKEN`.
    pub fn credentials(&self) -> Result<(&str, &SecretString), MissingSetting> {
        let store = self
            .store
            .as_deref()
            .ok_or(MissingSetting("SHOPIFY_STORE"))?;
        let token = self
            .access_token
            .as_ref()
            .ok_or(MissingSetting("SHOPIFY_ADMIN_TOKEN"))?;
        Ok((store, token))
    }

    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        let store = env
            .optional_with_fallback("SHOPIFY_STORE", "SHOP_URL")
            .map(|s| normalize_store(&s));
        let access_token = env
            .optional_with_fallback("SHOPIFY_ADMIN_TOKEN", "ADMIN_TOKEN")
            .map(|token| {
                if let Err(e) = validate_secret_strength(&token, "SHOPIFY_ADMIN_TOKEN") {
                    tracing::warn!("SHOPIFY_ADMIN_TOKEN validation warning: {e}");
                }
                SecretString::from(token)
            });
        let timeout_secs: u64 = env.parse_or("SHOPIFY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            store,
            access_token,
            api_version: env.or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION),
            api_base_url: env.optional("SHOPIFY_API_BASE_URL"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid. Missing
    /// Shopify credentials are not an error here; see [`ShopifyConfig::credentials`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    ///
    /// # Errors
    ///
    /// Same as [`RelayConfig::from_env`].
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ConfigError> {
        let env = Env(lookup);

        let host: IpAddr = env.parse_or("RELAY_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = env.parse_or("RELAY_PORT", 3000)?;
        let shopify = ShopifyConfig::from_env(&env)?;
        let policy = policy_from_env(&env)?;
        let log_json = env
            .optional("LOG_FORMAT")
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
            || env.optional("FLY_APP_NAME").is_some();

        Ok(Self {
            host,
            port,
            shopify,
            policy,
            log_json,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.parse_or("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: env.parse_or("SENTRY_TRACES_SAMPLE_RATE", 1.0)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn policy_from_env<F: Fn(&str) -> Option<String>>(
    env: &Env<F>,
) -> Result<DraftOrderPolicy, ConfigError> {
    let defaults = DraftOrderPolicy::default();

    let customer = match env
        .or_default("DRAFT_ORDER_CUSTOMER_POLICY", "validated")
        .to_ascii_lowercase()
        .as_str()
    {
        "validated" => CustomerPolicy::Validated,
        "fallback" => CustomerPolicy::Fallback {
            email: env.or_default(
                "DRAFT_ORDER_FALLBACK_EMAIL",
                DraftOrderPolicy::DEFAULT_FALLBACK_EMAIL,
            ),
        },
        "create_first" | "create-first" => CustomerPolicy::CreateFirst,
        other => {
            return Err(ConfigError::InvalidEnvVar(
                "DRAFT_ORDER_CUSTOMER_POLICY".to_string(),
                format!("unknown policy '{other}' (expected validated, fallback or create_first)"),
            ));
        }
    };

    Ok(DraftOrderPolicy {
        customer,
        notify_customer: env.flag("DRAFT_ORDER_NOTIFY_CUSTOMER", defaults.notify_customer)?,
        line_item_properties: env.flag(
            "DRAFT_ORDER_LINE_ITEM_PROPERTIES",
            defaults.line_item_properties,
        )?,
        stamp_note: env.flag("DRAFT_ORDER_STAMP_NOTE", defaults.stamp_note)?,
        shipping_country: env
            .or_default("DRAFT_ORDER_SHIPPING_COUNTRY", &defaults.shipping_country)
            .to_ascii_uppercase(),
        echo_request_on_error: env.flag(
            "DRAFT_ORDER_ECHO_REQUEST",
            defaults.echo_request_on_error,
        )?,
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Environment lookup with blank values treated as unset.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Get an optional variable, falling back to a legacy name.
    fn optional_with_fallback(&self, key: &str, legacy_key: &str) -> Option<String> {
        self.optional(key).or_else(|| self.optional(legacy_key))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, using `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }

    /// Parse a boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
    fn flag(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(raw) = self.optional(key) else {
            return Ok(default);
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("expected a boolean, got '{raw}'"),
            )),
        }
    }
}

/// Strip scheme, path and trailing slashes from a shop URL.
fn normalize_store(raw: &str) -> String {
    let without_scheme = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(**p)) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn config_from(pairs: &[(&str, &str)]) -> Result<RelayConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        RelayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.shopify.api_version, "2024-04");
        assert_eq!(config.shopify.timeout, Duration::from_secs(30));
        assert!(config.shopify.store.is_none());
        assert!(config.shopify.access_token.is_none());
        assert_eq!(config.policy, DraftOrderPolicy::default());
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_missing_credentials_are_named() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.shopify.credentials().unwrap_err(),
            MissingSetting("SHOPIFY_STORE")
        );

        let config = config_from(&[("SHOPIFY_STORE", "relay-shop.myshopify.com")]).unwrap();
        let err = config.shopify.credentials().unwrap_err();
        assert_eq!(err, MissingSetting("SHOPIFY_ADMIN_TOKEN"));
        assert_eq!(err.to_string(), "SHOPIFY_ADMIN_TOKEN is not configured");
    }

    #[test]
    fn test_credentials_with_legacy_names() {
        let config = config_from(&[
            ("SHOP_URL", "https://relay-shop.myshopify.com/"),
            ("ADMIN_TOKEN", "shpat_a1B2c3D4e5F6g7H8"),
        ])
        .unwrap();

        let (store, token) = config.shopify.credentials().unwrap();
        assert_eq!(store, "relay-shop.myshopify.com");
        assert_eq!(token.expose_secret(), "shpat_a1B2c3D4e5F6g7H8");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("SHOPIFY_STORE", "  "), ("RELAY_PORT", "")]).unwrap();
        assert!(config.shopify.store.is_none());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("RELAY_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "RELAY_PORT"));
    }

    #[test]
    fn test_customer_policies() {
        let config = config_from(&[("DRAFT_ORDER_CUSTOMER_POLICY", "create-first")]).unwrap();
        assert_eq!(config.policy.customer, CustomerPolicy::CreateFirst);

        let config = config_from(&[("DRAFT_ORDER_CUSTOMER_POLICY", "fallback")]).unwrap();
        assert_eq!(
            config.policy.customer,
            CustomerPolicy::Fallback {
                email: "no-reply@shopify.com".to_string()
            }
        );

        let config = config_from(&[
            ("DRAFT_ORDER_CUSTOMER_POLICY", "Fallback"),
            ("DRAFT_ORDER_FALLBACK_EMAIL", "orders@relay-shop.jp"),
        ])
        .unwrap();
        assert_eq!(
            config.policy.customer,
            CustomerPolicy::Fallback {
                email: "orders@relay-shop.jp".to_string()
            }
        );

        let err = config_from(&[("DRAFT_ORDER_CUSTOMER_POLICY", "always")]).unwrap_err();
        assert!(err.to_string().contains("unknown policy 'always'"));
    }

    #[test]
    fn test_policy_flags() {
        let config = config_from(&[
            ("DRAFT_ORDER_NOTIFY_CUSTOMER", "yes"),
            ("DRAFT_ORDER_LINE_ITEM_PROPERTIES", "0"),
            ("DRAFT_ORDER_STAMP_NOTE", "off"),
            ("DRAFT_ORDER_ECHO_REQUEST", "TRUE"),
            ("DRAFT_ORDER_SHIPPING_COUNTRY", "kr"),
        ])
        .unwrap();

        assert!(config.policy.notify_customer);
        assert!(!config.policy.line_item_properties);
        assert!(!config.policy.stamp_note);
        assert!(config.policy.echo_request_on_error);
        assert_eq!(config.policy.shipping_country, "KR");
    }

    #[test]
    fn test_invalid_flag() {
        let err = config_from(&[("DRAFT_ORDER_NOTIFY_CUSTOMER", "sometimes")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(ref key, _) if key == "DRAFT_ORDER_NOTIFY_CUSTOMER"
        ));
    }

    #[test]
    fn test_log_format() {
        assert!(config_from(&[("LOG_FORMAT", "JSON")]).unwrap().log_json);
        assert!(config_from(&[("FLY_APP_NAME", "relay")]).unwrap().log_json);
        assert!(!config_from(&[("LOG_FORMAT", "text")]).unwrap().log_json);
    }

    #[test]
    fn test_normalize_store() {
        assert_eq!(normalize_store("relay.myshopify.com"), "relay.myshopify.com");
        assert_eq!(
            normalize_store("https://relay.myshopify.com/"),
            "relay.myshopify.com"
        );
        assert_eq!(
            normalize_store("http://relay.myshopify.com/admin"),
            "relay.myshopify.com"
        );
    }

    #[test]
    fn test_shannon_entropy() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy("ab") - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength() {
        assert!(validate_secret_strength("your-token-here", "TEST_VAR").is_err());
        assert!(validate_secret_strength("aaaaaaaaaaaaaaaaaaaa", "TEST_VAR").is_err());
        assert!(validate_secret_strength("shpat_9fK2xQ7mB4vL1zR8", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_weak_token_still_loads() {
        let config = config_from(&[
            ("SHOPIFY_STORE", "relay-shop.myshopify.com"),
            ("SHOPIFY_ADMIN_TOKEN", "changeme"),
        ])
        .unwrap();

        let (_, token) = config.shopify.credentials().unwrap();
        assert_eq!(token.expose_secret(), "changeme");
    }

    #[test]
    fn test_shopify_config_debug_redacts_token() {
        let config = config_from(&[
            ("SHOPIFY_STORE", "relay-shop.myshopify.com"),
            ("SHOPIFY_ADMIN_TOKEN", "shpat_super_secret_9fK2xQ7mB4"),
        ])
        .unwrap();

        let debug_output = format!("{:?}", config.shopify);

        assert!(debug_output.contains("relay-shop.myshopify.com"));
        assert!(debug_output.contains("2024-04"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret"));
    }
}
