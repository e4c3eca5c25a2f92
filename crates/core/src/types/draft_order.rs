//! Outbound Shopify draft order (REST `draft_orders.json` body).
//!
//! Constructors enforce the shape Shopify accepts: exactly one line item with
//! quantity 1, no empty `customer` object, no blank `shipping_address`.

use serde::Serialize;

use super::price::Price;

/// Request body for `POST /admin/api/{version}/draft_orders.json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DraftOrderRequest {
    pub draft_order: DraftOrder,
}

/// Draft order fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DraftOrder {
    /// Always a single line item.
    pub line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    pub note: String,
    /// Whether Shopify emails the customer about the draft order.
    pub email: bool,
}

/// A custom (non-catalog) line item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineItem {
    pub title: String,
    pub price: Price,
    quantity: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<LineItemProperty>,
}

impl LineItem {
    /// Multi-item orders are not modeled; every line item is a single unit.
    pub const QUANTITY: u32 = 1;

    #[must_use]
    pub const fn new(title: String, price: Price, properties: Vec<LineItemProperty>) -> Self {
        Self {
            title,
            price,
            quantity: Self::QUANTITY,
            properties,
        }
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A name/value pair shown on the line item in the Shopify admin.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineItemProperty {
    pub name: String,
    pub value: String,
}

impl LineItemProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Customer attached to a draft order.
///
/// Either inline details (`email` and/or `first_name`) or a reference to an
/// existing customer by `id`. Never serialized with zero fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
}

impl CustomerRecord {
    /// Build inline customer details, or `None` when there is nothing to send.
    #[must_use]
    pub fn from_details(email: Option<String>, first_name: Option<String>) -> Option<Self> {
        if email.is_none() && first_name.is_none() {
            return None;
        }
        Some(Self {
            id: None,
            email,
            first_name,
        })
    }

    /// Reference a customer that already exists in Shopify.
    #[must_use]
    pub const fn existing(id: u64) -> Self {
        Self {
            id: Some(id),
            email: None,
            first_name: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }
}

/// Shipping address for the draft order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShippingAddress {
    pub address1: String,
    pub zip: String,
    pub country: String,
}

impl ShippingAddress {
    /// Build an address, or `None` when neither a street line nor a postal
    /// code is known.
    #[must_use]
    pub fn from_parts(
        address1: Option<&str>,
        zip: Option<&str>,
        country: impl Into<String>,
    ) -> Option<Self> {
        if address1.is_none() && zip.is_none() {
            return None;
        }
        Some(Self {
            address1: address1.unwrap_or_default().to_owned(),
            zip: zip.unwrap_or_default().to_owned(),
            country: country.into(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_item_quantity_is_one() {
        let item = LineItem::new("액자".to_string(), Price::ZERO, vec![]);
        assert_eq!(item.quantity(), 1);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "title": "액자", "price": "0", "quantity": 1 })
        );
    }

    #[test]
    fn test_customer_without_fields_is_none() {
        assert!(CustomerRecord::from_details(None, None).is_none());
    }

    #[test]
    fn test_customer_serializes_only_present_fields() {
        let customer = CustomerRecord::from_details(None, Some("花子".to_string())).unwrap();
        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({ "first_name": "花子" })
        );

        let existing = CustomerRecord::existing(7_001);
        assert_eq!(
            serde_json::to_value(&existing).unwrap(),
            json!({ "id": 7001 })
        );
    }

    #[test]
    fn test_shipping_address_requires_a_part() {
        assert!(ShippingAddress::from_parts(None, None, "JP").is_none());

        let address = ShippingAddress::from_parts(None, Some("150-0001"), "JP").unwrap();
        assert_eq!(address.address1, "");
        assert_eq!(address.zip, "150-0001");
        assert_eq!(address.country, "JP");
    }

    #[test]
    fn test_draft_order_omits_absent_sections() {
        let request = DraftOrderRequest {
            draft_order: DraftOrder {
                line_items: vec![LineItem::new("액자".to_string(), Price::ZERO, vec![])],
                customer: None,
                shipping_address: None,
                note: "주문ID: A1".to_string(),
                email: false,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        let draft = value.get("draft_order").unwrap();
        assert!(draft.get("customer").is_none());
        assert!(draft.get("shipping_address").is_none());
        assert_eq!(draft["email"], json!(false));
    }
}
