//! Line-item price normalization.
//!
//! Order payloads carry `total_amount` either as a JSON number or as a string,
//! and Shopify's REST API expects the line-item `price` as a decimal string.
//! [`Price`] is the bridge: lenient on the way in, always a string on the way
//! out.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A non-negative decimal amount that serializes as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Zero, used when the order carries no usable amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Returns `None` for negative amounts.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (!amount.is_sign_negative() || amount.is_zero()).then_some(Self(amount))
    }

    /// Parse a price from a JSON value.
    ///
    /// Numbers and numeric strings are accepted; strings may carry
    /// surrounding whitespace and `,` thousands separators. Everything else
    /// (null, bool, objects, non-numeric text, negative amounts) yields `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) => parse_decimal(&s.trim().replace(',', "")),
            _ => None,
        }
        .and_then(Self::new)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
