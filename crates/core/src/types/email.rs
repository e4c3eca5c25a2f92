//! Customer email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Substrings that mark an address as a placeholder (case-sensitive).
///
/// Shopify's customer validator rejects these, and a rejected customer email
/// fails the whole draft order.
const BLOCKLISTED_PATTERNS: &[&str] = &["test", "example"];

/// Errors that can occur when parsing a [`CustomerEmail`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerEmailError {
    /// The input string is empty (after trimming).
    #[error("email cannot be empty")]
    Empty,
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// The input does not contain a dot.
    #[error("email must contain a dot")]
    MissingDot,
    /// The input contains a placeholder pattern.
    #[error("email looks like a placeholder (contains '{0}')")]
    Blocklisted(&'static str),
}

/// An email address that Shopify is expected to accept for a customer.
///
/// A shallow check against what Shopify rejects in practice, not RFC 5322.
///
/// ## Constraints
///
/// - Non-empty after trimming surrounding whitespace
/// - Contains an `@` symbol and a `.`
/// - Does not contain the lowercase substrings `test` or `example`
///
/// ## Examples
///
/// ```
/// use draft_order_core::CustomerEmail;
///
/// assert!(CustomerEmail::parse("hanako@shop.jp").is_ok());
/// assert!(CustomerEmail::parse("  hanako@shop.jp  ").is_ok());
///
/// assert!(CustomerEmail::parse("").is_err());
/// assert!(CustomerEmail::parse("hanako.shop.jp").is_err());
/// assert!(CustomerEmail::parse("hanako@localhost").is_err());
/// assert!(CustomerEmail::parse("qa@example.com").is_err());
/// assert!(CustomerEmail::parse("qa@Example.com").is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Parse a `CustomerEmail`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input:
    /// - Is empty
    /// - Has no @ symbol or no dot
    /// - Contains a blocklisted placeholder pattern
    pub fn parse(s: &str) -> Result<Self, CustomerEmailError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(CustomerEmailError::Empty);
        }

        if !s.contains('@') {
            return Err(CustomerEmailError::MissingAtSymbol);
        }

        if !s.contains('.') {
            return Err(CustomerEmailError::MissingDot);
        }

        if let Some(pattern) = BLOCKLISTED_PATTERNS
            .iter()
            .copied()
            .find(|p| s.contains(p))
        {
            return Err(CustomerEmailError::Blocklisted(pattern));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerEmail` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Whether Shopify should be handed this address as a customer email.
///
/// Named predicate form of [`CustomerEmail::parse`].
#[must_use]
pub fn is_deliverable_email(s: &str) -> bool {
    CustomerEmail::parse(s).is_ok()
}

impl fmt::Display for CustomerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerEmail {
    type Err = CustomerEmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CustomerEmail {
    type Error = CustomerEmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CustomerEmail> for String {
    fn from(email: CustomerEmail) -> Self {
        email.0
    }
}

impl AsRef<str> for CustomerEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
