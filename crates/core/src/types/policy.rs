//! Draft order construction policy.
//!
//! Everything that varies between deployments of the relay lives here, so
//! one code path serves all of them.

use serde::{Deserialize, Serialize};

/// How the draft order's customer is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CustomerPolicy {
    /// Attach only what passes validation; omit the customer when nothing does.
    #[default]
    Validated,
    /// Always attach a customer, substituting `email` when the buyer's address
    /// is missing or would be rejected by Shopify.
    Fallback {
        /// Address used when the buyer's email is unusable.
        email: String,
    },
    /// Create a customer with a generated placeholder address first, then
    /// reference it from the draft order.
    CreateFirst,
}

impl CustomerPolicy {
    /// Policy name as used in configuration.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Validated => "validated",
            Self::Fallback { .. } => "fallback",
            Self::CreateFirst => "create_first",
        }
    }
}

impl std::fmt::Display for CustomerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Knobs for turning an order into a draft order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrderPolicy {
    pub customer: CustomerPolicy,
    /// Shopify `email` flag: send the customer an invoice email.
    pub notify_customer: bool,
    /// Attach order id, option summary and file count to the line item.
    pub line_item_properties: bool,
    /// Append the creation timestamp to the note.
    pub stamp_note: bool,
    /// ISO country code for the shipping address.
    pub shipping_country: String,
    /// Include the outbound request body in rejection responses.
    pub echo_request_on_error: bool,
}

impl DraftOrderPolicy {
    pub const DEFAULT_SHIPPING_COUNTRY: &'static str = "JP";
    pub const DEFAULT_FALLBACK_EMAIL: &'static str = "no-reply@shopify.com";
}

impl Default for DraftOrderPolicy {
    fn default() -> Self {
        Self {
            customer: CustomerPolicy::Validated,
            notify_customer: false,
            line_item_properties: true,
            stamp_note: true,
            shipping_country: Self::DEFAULT_SHIPPING_COUNTRY.to_string(),
            echo_request_on_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = DraftOrderPolicy::default();
        assert_eq!(policy.customer, CustomerPolicy::Validated);
        assert!(!policy.notify_customer);
        assert!(policy.line_item_properties);
        assert!(policy.stamp_note);
        assert_eq!(policy.shipping_country, "JP");
        assert!(!policy.echo_request_on_error);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(CustomerPolicy::Validated.to_string(), "validated");
        assert_eq!(
            CustomerPolicy::Fallback {
                email: DraftOrderPolicy::DEFAULT_FALLBACK_EMAIL.to_string()
            }
            .to_string(),
            "fallback"
        );
        assert_eq!(CustomerPolicy::CreateFirst.to_string(), "create_first");
    }
}
