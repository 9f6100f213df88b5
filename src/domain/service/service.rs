use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Call-to-action label used when none is given
pub const DEFAULT_CTA_TEXT: &str = "Hire Me";

/// Call-to-action target used when none is given
pub const DEFAULT_CTA_LINK: &str = "/contact";

/// Details page used when none is given
pub const DEFAULT_DETAILS_LINK: &str = "/services";

/// A service offering shown on the services page
///
/// Not to be confused with the application services in `crate::services`.
/// Listings sort ascending by `display_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
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

impl Default for Service {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            short_description: String::new(),
            full_description: String::new(),
            icon_class: String::new(),
            price: None,
            features: Vec::new(),
            cta_text: DEFAULT_CTA_TEXT.to_string(),
            cta_link: DEFAULT_CTA_LINK.to_string(),
            display_order: 0,
            featured: false,
            created_at: None,
            updated_at: None,
            details_link: DEFAULT_DETAILS_LINK.to_string(),
        }
    }
}

impl Service {
    /// Returns true once the service has been persisted
    pub fn is_persisted(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_call_to_action() {
        let service = Service::default();
        assert_eq!(service.cta_text, "Hire Me");
        assert_eq!(service.cta_link, "/contact");
        assert_eq!(service.details_link, "/services");
        assert_eq!(service.display_order, 0);
        assert!(service.price.is_none());
    }
}
