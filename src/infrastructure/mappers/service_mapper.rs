use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use super::{non_blank, EntityMapper};
use crate::domain::identity::parse_id;
use crate::domain::service::{Service, DEFAULT_CTA_LINK, DEFAULT_CTA_TEXT, DEFAULT_DETAILS_LINK};
use crate::domain::timestamps::{format_timestamp, next_update, now, now_string, parse_timestamp};
use crate::dto::{CreateUpdateServiceRequest, ServiceResponse};
use crate::infrastructure::entities::ServiceEntity;

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceMapper;

/// Stored price text to a decimal; unparseable text reads as no price
fn parse_price(price: Option<&str>) -> Option<Decimal> {
    price.and_then(|p| Decimal::from_str(p.trim()).ok())
}

/// Link-like fields never end up blank: request, then existing, then default
fn link_field(request: Option<&String>, existing: Option<&str>, default: &str) -> String {
    non_blank(request)
        .or_else(|| existing.filter(|e| !e.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| default.to_string())
}

impl EntityMapper for ServiceMapper {
    type Entity = ServiceEntity;
    type Model = Service;
    type Request = CreateUpdateServiceRequest;
    type Response = ServiceResponse;

    fn to_model(&self, entity: &ServiceEntity) -> Service {
        Service {
            id: entity.id.to_string(),
            title: entity.title.clone(),
            short_description: entity.short_description.clone(),
            full_description: entity.full_description.clone(),
            icon_class: entity.icon_class.clone(),
            price: parse_price(entity.price.as_deref()),
            features: entity.features.clone(),
            cta_text: entity.cta_text.clone(),
            cta_link: entity.cta_link.clone(),
            display_order: entity.display_order,
            featured: entity.featured,
            created_at: Some(format_timestamp(entity.created_at)),
            updated_at: Some(format_timestamp(entity.updated_at)),
            details_link: entity.details_link.clone(),
        }
    }

    fn to_entity(&self, model: &Service) -> ServiceEntity {
        ServiceEntity {
            id: parse_id(&model.id).unwrap_or_else(Uuid::new_v4),
            title: model.title.clone(),
            short_description: model.short_description.clone(),
            full_description: model.full_description.clone(),
            icon_class: model.icon_class.clone(),
            price: model.price.map(|p| p.to_string()),
            features: model.features.clone(),
            cta_text: model.cta_text.clone(),
            cta_link: model.cta_link.clone(),
            display_order: model.display_order,
            featured: model.featured,
            details_link: model.details_link.clone(),
            created_at: model
                .created_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_else(now),
            updated_at: model
                .updated_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_else(now),
        }
    }

    fn update_entity(&self, entity: &mut ServiceEntity, model: &Service) {
        entity.title = model.title.clone();
        entity.short_description = model.short_description.clone();
        entity.full_description = model.full_description.clone();
        entity.icon_class = model.icon_class.clone();
        entity.price = model.price.map(|p| p.to_string());
        entity.features = model.features.clone();
        entity.cta_text = model.cta_text.clone();
        entity.cta_link = model.cta_link.clone();
        entity.display_order = model.display_order;
        entity.featured = model.featured;
        entity.details_link = model.details_link.clone();
        entity.updated_at = next_update(entity.updated_at);
    }

    fn to_domain(
        &self,
        request: &CreateUpdateServiceRequest,
        existing: Option<&Service>,
    ) -> Service {
        let base = existing.cloned().unwrap_or_else(|| {
            let created = now_string();
            Service {
                created_at: Some(created.clone()),
                updated_at: Some(created),
                ..Service::default()
            }
        });

        let cta_text = link_field(
            request.cta_text.as_ref(),
            Some(base.cta_text.as_str()),
            DEFAULT_CTA_TEXT,
        );
        let cta_link = link_field(
            request.cta_link.as_ref(),
            Some(base.cta_link.as_str()),
            DEFAULT_CTA_LINK,
        );
        let details_link = link_field(
            request.details_link.as_ref(),
            Some(base.details_link.as_str()),
            DEFAULT_DETAILS_LINK,
        );

        Service {
            id: base.id,
            title: request.title.clone().unwrap_or(base.title),
            short_description: request
                .short_description
                .clone()
                .unwrap_or(base.short_description),
            full_description: request
                .full_description
                .clone()
                .unwrap_or(base.full_description),
            icon_class: request.icon_class.clone().unwrap_or(base.icon_class),
            price: request.price.or(base.price),
            features: request.features.clone().unwrap_or(base.features),
            cta_text,
            cta_link,
            display_order: request.display_order.unwrap_or(base.display_order),
            featured: request.featured.unwrap_or(base.featured),
            created_at: base.created_at,
            updated_at: base.updated_at,
            details_link,
        }
    }

    fn to_response(&self, model: &Service) -> ServiceResponse {
        ServiceResponse {
            id: parse_id(&model.id),
            title: model.title.clone(),
            short_description: model.short_description.clone(),
            full_description: model.full_description.clone(),
            icon_class: model.icon_class.clone(),
            price: model.price,
            features: model.features.clone(),
            cta_text: model.cta_text.clone(),
            cta_link: model.cta_link.clone(),
            display_order: model.display_order,
            featured: model.featured,
            created_at: model.created_at.clone(),
            updated_at: model.updated_at.clone(),
            details_link: model.details_link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_fills_call_to_action_defaults() {
        let request = CreateUpdateServiceRequest {
            title: Some("Web development".to_string()),
            ..Default::default()
        };

        let model = ServiceMapper.to_domain(&request, None);

        assert_eq!(model.cta_text, "Hire Me");
        assert_eq!(model.cta_link, "/contact");
        assert_eq!(model.details_link, "/services");
        assert_eq!(model.display_order, 0);
        assert!(model.price.is_none());
        assert!(model.created_at.is_some());
    }

    #[test]
    fn blank_link_falls_back_to_existing() {
        let existing = Service {
            cta_text: "Book a call".to_string(),
            ..Service::default()
        };
        let request = CreateUpdateServiceRequest {
            cta_text: Some("   ".to_string()),
            cta_link: Some("/book".to_string()),
            ..Default::default()
        };

        let merged = ServiceMapper.to_domain(&request, Some(&existing));

        assert_eq!(merged.cta_text, "Book a call");
        assert_eq!(merged.cta_link, "/book");
    }

    #[test]
    fn patch_keeps_identity_and_links() {
        let existing = Service {
            id: "6a1f9c2e-3b4d-4e5f-8a7b-9c0d1e2f3a4b".to_string(),
            details_link: "/services/web".to_string(),
            created_at: Some("2024-01-01T00:00:00.000000Z".to_string()),
            ..Service::default()
        };
        let request = CreateUpdateServiceRequest {
            title: Some("Web".to_string()),
            details_link: Some(String::new()),
            ..Default::default()
        };

        let merged = ServiceMapper.to_domain(&request, Some(&existing));

        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.title, "Web");
        assert_eq!(merged.details_link, "/services/web");
        assert_eq!(merged.cta_text, "Hire Me");
        assert_eq!(merged.created_at, existing.created_at);
    }

    #[test]
    fn patch_keeps_price_when_absent() {
        let existing = Service {
            price: Some(Decimal::new(50000, 2)),
            display_order: 3,
            ..Service::default()
        };
        let request = CreateUpdateServiceRequest {
            display_order: Some(1),
            ..Default::default()
        };

        let merged = ServiceMapper.to_domain(&request, Some(&existing));

        assert_eq!(merged.price, Some(Decimal::new(50000, 2)));
        assert_eq!(merged.display_order, 1);
    }

    #[test]
    fn price_is_stored_as_text() {
        let model = Service {
            price: Some(Decimal::new(14999, 2)),
            ..Service::default()
        };

        let entity = ServiceMapper.to_entity(&model);

        assert_eq!(entity.price.as_deref(), Some("149.99"));
        assert_eq!(ServiceMapper.to_model(&entity).price, model.price);
    }

    #[test]
    fn unparseable_stored_price_reads_as_none() {
        let mut entity = ServiceMapper.to_entity(&Service::default());
        entity.price = Some("call for quote".to_string());

        assert!(ServiceMapper.to_model(&entity).price.is_none());
    }

    #[test]
    fn price_serializes_as_string() {
        let model = Service {
            price: Some(Decimal::new(2500, 2)),
            ..Service::default()
        };
        let json = serde_json::to_value(ServiceMapper.to_response(&model)).unwrap();
        assert_eq!(json["price"], "25.00");
        assert!(json["id"].is_null());
    }
}
