use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for creating or patching a service offering
///
/// `price` is accepted as a JSON string or number.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateServiceRequest {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub icon_class: Option<String>,
    pub price: Option<Decimal>,
    pub features: Option<Vec<String>>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub display_order: Option<i32>,
    pub featured: Option<bool>,
    pub details_link: Option<String>,
}

/// Service offering as returned to clients; `price` serializes as a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: Option<Uuid>,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub icon_class: String,
    pub price: Option<Decimal>,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub display_order: i32,
    pub featured: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub details_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceListResponse {
    pub services: Vec<ServiceResponse>,
    pub count: usize,
}

impl From<Vec<ServiceResponse>> for ServiceListResponse {
    fn from(services: Vec<ServiceResponse>) -> Self {
        let count = services.len();
        Self { services, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_string_or_number() {
        let from_string: CreateUpdateServiceRequest =
            serde_json::from_str(r#"{"price": "149.99"}"#).unwrap();
        let from_number: CreateUpdateServiceRequest =
            serde_json::from_str(r#"{"price": 149.99}"#).unwrap();

        assert_eq!(from_string.price, Some(Decimal::new(14999, 2)));
        assert_eq!(from_number.price, Some(Decimal::new(14999, 2)));
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let request: CreateUpdateServiceRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.display_order.is_none());
        assert!(request.features.is_none());
    }
}
