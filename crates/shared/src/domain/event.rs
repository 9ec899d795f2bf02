use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CHECKOUT_SESSION_COMPLETED: &str = "checkout.session.completed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: PaymentEventData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEventData {
    pub object: CheckoutSession,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,

    #[serde(default)]
    pub metadata: HashMap<String, String>,

    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
}

impl CheckoutSession {
    pub fn order_id(&self) -> Option<&str> {
        self.metadata.get("orderId").map(String::as_str)
    }

    pub fn phone(&self) -> String {
        self.customer_details
            .as_ref()
            .and_then(|details| details.phone.clone())
            .unwrap_or_default()
    }

    pub fn shipping_address(&self) -> String {
        self.customer_details
            .as_ref()
            .and_then(|details| details.address.as_ref())
            .map(ShippingAddress::to_display_string)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub line1: Option<String>,

    #[serde(default)]
    pub line2: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub postal_code: Option<String>,

    #[serde(default)]
    pub country: Option<String>,
}

impl ShippingAddress {
    // component order is fixed: line1, line2, city, state, postal_code, country
    pub fn to_display_string(&self) -> String {
        [
            &self.line1,
            &self.line2,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|component| component.as_deref())
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_address_in_fixed_order() {
        let address = ShippingAddress {
            line1: Some("123 Main St".into()),
            line2: Some("Apt 4".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            postal_code: Some("62704".into()),
            country: Some("US".into()),
        };

        assert_eq!(
            address.to_display_string(),
            "123 Main St, Apt 4, Springfield, IL, 62704, US"
        );
    }

    #[test]
    fn drops_missing_components_without_double_separators() {
        let address = ShippingAddress {
            line1: Some("123 Main St".into()),
            line2: None,
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            postal_code: Some("62704".into()),
            country: Some("US".into()),
        };

        assert_eq!(
            address.to_display_string(),
            "123 Main St, Springfield, IL, 62704, US"
        );
    }

    #[test]
    fn drops_empty_string_components() {
        let address = ShippingAddress {
            line1: Some("123 Main St".into()),
            line2: Some(String::new()),
            city: Some("Springfield".into()),
            ..ShippingAddress::default()
        };

        assert_eq!(address.to_display_string(), "123 Main St, Springfield");
    }

    #[test]
    fn empty_address_formats_to_empty_string() {
        assert_eq!(ShippingAddress::default().to_display_string(), "");
    }

    #[test]
    fn session_reads_order_id_from_metadata() {
        let payload = serde_json::json!({
            "id": "cs_test_123",
            "metadata": { "orderId": "0d1f7e84-7a37-4e0c-9d3a-111111111111" },
            "customer_details": {
                "phone": "+1 555 0100",
                "address": { "line1": "123 Main St", "city": "Springfield" }
            }
        });

        let session: CheckoutSession = serde_json::from_value(payload).unwrap();
        assert_eq!(
            session.order_id(),
            Some("0d1f7e84-7a37-4e0c-9d3a-111111111111")
        );
        assert_eq!(session.phone(), "+1 555 0100");
        assert_eq!(session.shipping_address(), "123 Main St, Springfield");
    }

    #[test]
    fn phone_defaults_to_empty_when_absent() {
        let payload = serde_json::json!({ "id": "cs_test_456" });
        let session: CheckoutSession = serde_json::from_value(payload).unwrap();
        assert_eq!(session.order_id(), None);
        assert_eq!(session.phone(), "");
        assert_eq!(session.shipping_address(), "");
    }
}
