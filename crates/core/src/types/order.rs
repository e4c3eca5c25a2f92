//! Inbound order payload.
//!
//! The storefront posts whatever it has collected so far, so every field is
//! optional and deserialization never fails on an individual field: missing
//! keys, `null`, blank strings and values of the wrong JSON type all become
//! `None`. Only a body that is not a JSON object at all is rejected.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::price::Price;

/// An order record as submitted by the storefront.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrderInput {
    /// Storefront order identifier. Numeric ids are rendered as strings.
    #[serde(deserialize_with = "lenient_string")]
    pub order_id: Option<String>,
    /// Product title for the single line item.
    #[serde(deserialize_with = "lenient_string")]
    pub product_title: Option<String>,
    /// Total amount, either a JSON number or a numeric string.
    pub total_amount: Option<Value>,
    /// Buyer and shipping details.
    #[serde(deserialize_with = "lenient_record")]
    pub customer_info: Option<CustomerInfo>,
    /// Options the buyer picked in the configurator.
    #[serde(deserialize_with = "lenient_record")]
    pub selected_options: Option<SelectedOptions>,
    /// Files the buyer uploaded with the order.
    #[serde(deserialize_with = "lenient_record")]
    pub uploaded_files: Option<UploadedFiles>,
}

/// Buyer and shipping details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub recipient_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub postal_code: Option<String>,
}

/// Configurator selections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectedOptions {
    /// Human-readable summary of the selections.
    #[serde(deserialize_with = "lenient_string")]
    pub order_summary: Option<String>,
}

/// Uploaded file metadata. Only the count is relayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UploadedFiles {
    #[serde(deserialize_with = "lenient_record")]
    pub files: Option<Vec<Value>>,
}

impl OrderInput {
    /// Parse an order from a raw request body.
    ///
    /// An empty (or whitespace-only) body is an empty order.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "order payload must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// The line-item price, if the order carries a usable amount.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.total_amount.as_ref().and_then(Price::from_json)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.customer_info.as_ref()?.email.as_deref()
    }

    #[must_use]
    pub fn recipient_name(&self) -> Option<&str> {
        self.customer_info.as_ref()?.recipient_name.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.customer_info.as_ref()?.address.as_deref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.customer_info.as_ref()?.postal_code.as_deref()
    }

    #[must_use]
    pub fn order_summary(&self) -> Option<&str> {
        self.selected_options.as_ref()?.order_summary.as_deref()
    }

    /// Number of uploaded files, or `None` when no file list was sent.
    #[must_use]
    pub fn file_count(&self) -> Option<usize> {
        self.uploaded_files.as_ref()?.files.as_ref().map(Vec::len)
    }
}

/// Accept strings and numbers; blank strings and anything else become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept a nested value only if it has the expected shape.
fn lenient_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
