//! Order → draft order transformation.
//!
//! Pure functions only. The caller supplies the clock and, for the
//! create-first customer policy, the outcome of the customer step.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::types::{
    CustomerCreateRequest, CustomerEmail, CustomerLink, CustomerPolicy, CustomerRecord,
    DraftOrder, DraftOrderPolicy, DraftOrderRequest, LineItem, LineItemProperty, NewCustomer,
    OrderInput, Price, ShippingAddress,
};

/// Line-item title when the order has none.
pub const DEFAULT_PRODUCT_TITLE: &str = "커스텀 주문";

/// Customer first name when the order has no recipient name.
pub const DEFAULT_CUSTOMER_NAME: &str = "고객";

/// Stand-in for a missing order id in notes.
const UNSPECIFIED_ORDER_ID: &str = "미지정";

/// Property value for absent option summaries and file lists.
const NONE_LABEL: &str = "없음";

const PROPERTY_ORDER_ID: &str = "주문ID";
const PROPERTY_OPTIONS: &str = "선택옵션";
const PROPERTY_FILES: &str = "파일";

/// Build the `draft_orders.json` request body for an order.
///
/// `customer_link` is only consulted under [`CustomerPolicy::CreateFirst`];
/// pass `None` for the other policies.
#[must_use]
pub fn build_draft_order(
    order: &OrderInput,
    policy: &DraftOrderPolicy,
    customer_link: Option<CustomerLink>,
    now: DateTime<Utc>,
) -> DraftOrderRequest {
    let title = order
        .product_title
        .clone()
        .unwrap_or_else(|| DEFAULT_PRODUCT_TITLE.to_string());
    let price = order.price().unwrap_or(Price::ZERO);
    let properties = if policy.line_item_properties {
        line_item_properties(order)
    } else {
        Vec::new()
    };

    DraftOrderRequest {
        draft_order: DraftOrder {
            line_items: vec![LineItem::new(title, price, properties)],
            customer: customer_record(order, &policy.customer, customer_link),
            shipping_address: ShippingAddress::from_parts(
                order.address(),
                order.postal_code(),
                policy.shipping_country.as_str(),
            ),
            note: note(order, policy.stamp_note.then_some(now)),
            email: policy.notify_customer,
        },
    }
}

/// Build the `customers.json` request body for the create-first policy.
///
/// Shopify rejects duplicate and disposable-looking addresses, so the
/// customer gets a unique placeholder under the shop's own domain.
#[must_use]
pub fn build_customer_request(
    order: &OrderInput,
    shop_domain: &str,
    id: Uuid,
) -> CustomerCreateRequest {
    CustomerCreateRequest {
        customer: NewCustomer {
            first_name: order
                .recipient_name()
                .unwrap_or(DEFAULT_CUSTOMER_NAME)
                .to_owned(),
            email: placeholder_email(shop_domain, id),
            note: note(order, None),
        },
    }
}

/// Unique placeholder address for a generated customer.
#[must_use]
pub fn placeholder_email(shop_domain: &str, id: Uuid) -> String {
    format!("guest-{}@{shop_domain}", id.simple())
}

fn line_item_properties(order: &OrderInput) -> Vec<LineItemProperty> {
    let files = order
        .file_count()
        .map_or_else(|| NONE_LABEL.to_string(), |n| format!("{n}개"));

    vec![
        LineItemProperty::new(PROPERTY_ORDER_ID, order.order_id.clone().unwrap_or_default()),
        LineItemProperty::new(PROPERTY_OPTIONS, order.order_summary().unwrap_or(NONE_LABEL)),
        LineItemProperty::new(PROPERTY_FILES, files),
    ]
}

fn customer_record(
    order: &OrderInput,
    policy: &CustomerPolicy,
    customer_link: Option<CustomerLink>,
) -> Option<CustomerRecord> {
    let valid_email = order
        .email()
        .and_then(|e| CustomerEmail::parse(e).ok())
        .map(CustomerEmail::into_inner);
    let name = order.recipient_name().map(str::to_owned);

    match policy {
        CustomerPolicy::Validated => CustomerRecord::from_details(valid_email, name),
        CustomerPolicy::Fallback { email } => CustomerRecord::from_details(
            Some(valid_email.unwrap_or_else(|| email.clone())),
            Some(name.unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string())),
        ),
        CustomerPolicy::CreateFirst => customer_link
            .and_then(|link| link.customer_id)
            .map(CustomerRecord::existing),
    }
}

fn note(order: &OrderInput, stamped_at: Option<DateTime<Utc>>) -> String {
    let order_id = order.order_id.as_deref().unwrap_or(UNSPECIFIED_ORDER_ID);
    match stamped_at {
        Some(at) => format!(
            "주문ID: {order_id} | 생성: {}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        None => format!("주문ID: {order_id}"),
    }
}
