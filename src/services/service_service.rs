use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainResult;
use crate::domain::repositories::ServiceRepository;
use crate::domain::service::Service;
use crate::domain::timestamps::next_update_string;
use crate::dto::{CreateUpdateServiceRequest, ServiceListResponse, ServiceResponse};
use crate::infrastructure::mappers::{EntityMapper, ServiceMapper};

/// Use cases for service offerings
pub struct ServiceService {
    repository: Arc<dyn ServiceRepository>,
    mapper: ServiceMapper,
}

impl ServiceService {
    pub fn new(repository: Arc<dyn ServiceRepository>, mapper: ServiceMapper) -> Self {
        Self { repository, mapper }
    }

    /// Every service ascending by display order
    pub async fn get_all(&self) -> DomainResult<Vec<Service>> {
        self.repository.find_ordered_by_display().await
    }

    pub async fn get_featured(&self) -> DomainResult<Vec<Service>> {
        self.repository.find_featured().await
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Option<Service>> {
        self.repository.find_by_id(id).await
    }

    /// Always inserts a new service
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: &CreateUpdateServiceRequest) -> DomainResult<Service> {
        let service = self.mapper.to_domain(request, None);
        let saved = self.repository.save(&service).await?;
        info!(service_id = %saved.id, "Created service");
        Ok(saved)
    }

    /// Patches a service; `None` when the id does not resolve
    ///
    /// Writes through the repository's strict update, which would raise if
    /// the record vanished between the lookup and the write.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &CreateUpdateServiceRequest,
    ) -> DomainResult<Option<Service>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            debug!("Service not found for update");
            return Ok(None);
        };

        let merged = self.mapper.to_domain(request, Some(&existing));
        let saved = self.repository.update(&merged).await?;
        info!(service_id = %saved.id, "Updated service");
        Ok(Some(saved))
    }

    #[instrument(skip(self))]
    pub async fn toggle_featured(&self, id: &str) -> DomainResult<Option<Service>> {
        let Some(mut service) = self.repository.find_by_id(id).await? else {
            debug!("Service not found for toggle");
            return Ok(None);
        };

        service.featured = !service.featured;
        service.updated_at = Some(next_update_string(service.updated_at.as_deref()));

        let saved = self.repository.save(&service).await?;
        info!(service_id = %saved.id, featured = saved.featured, "Toggled service featured flag");
        Ok(Some(saved))
    }

    /// Deletes a service; reports `true` even when nothing was stored
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> DomainResult<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!("Deleted service");
        Ok(deleted)
    }

    pub fn to_response(&self, service: &Service) -> ServiceResponse {
        self.mapper.to_response(service)
    }

    pub fn to_list_response(&self, services: &[Service]) -> ServiceListResponse {
        services
            .iter()
            .map(|s| self.mapper.to_response(s))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::infrastructure::repositories::InMemoryServiceRepository;

    fn setup() -> (ServiceService, Arc<InMemoryServiceRepository>) {
        let repository = Arc::new(InMemoryServiceRepository::new());
        let service = ServiceService::new(repository.clone(), ServiceMapper);
        (service, repository)
    }

    fn offering(title: &str, order: i32) -> CreateUpdateServiceRequest {
        CreateUpdateServiceRequest {
            title: Some(title.to_string()),
            display_order: Some(order),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_all_orders_by_display_order() {
        let (service, _) = setup();
        service.create(&offering("Consulting", 3)).await.unwrap();
        service.create(&offering("Web", 1)).await.unwrap();
        service.create(&offering("3D", 2)).await.unwrap();

        let titles: Vec<String> = service
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(titles, vec!["Web", "3D", "Consulting"]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let (service, _) = setup();
        let result = service
            .update("8b0c5a3e-1f2d-4c6b-9e7a-2d4f6a8b0c1e", &offering("x", 0))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn strict_repository_update_rejects_blank_and_unknown_ids() {
        let (_, repository) = setup();

        let blank = repository.update(&Service::default()).await;
        assert!(matches!(blank, Err(DomainError::Validation { .. })));

        let unknown = repository
            .update(&Service {
                id: "8b0c5a3e-1f2d-4c6b-9e7a-2d4f6a8b0c1e".to_string(),
                ..Service::default()
            })
            .await;
        assert!(matches!(unknown, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_patches_existing() {
        let (service, _) = setup();
        let created = service.create(&offering("Web", 1)).await.unwrap();
        assert!(created.is_persisted());

        let request = CreateUpdateServiceRequest {
            cta_text: Some("Get a quote".to_string()),
            ..Default::default()
        };
        let updated = service.update(&created.id, &request).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Web");
        assert_eq!(updated.display_order, 1);
        assert_eq!(updated.cta_text, "Get a quote");
    }

    #[tokio::test]
    async fn delete_reports_true_even_when_missing() {
        let (service, _) = setup();
        assert!(service
            .delete("8b0c5a3e-1f2d-4c6b-9e7a-2d4f6a8b0c1e")
            .await
            .unwrap());
    }
}
