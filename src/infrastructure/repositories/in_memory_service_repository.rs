use async_trait::async_trait;

use super::in_memory_store::InMemoryStore;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::identity::parse_id;
use crate::domain::repositories::ServiceRepository;
use crate::domain::service::Service;
use crate::infrastructure::entities::ServiceEntity;
use crate::infrastructure::mappers::{EntityMapper, ServiceMapper};

/// In-memory implementation of ServiceRepository
#[derive(Debug, Default)]
pub struct InMemoryServiceRepository {
    store: InMemoryStore<ServiceEntity>,
    mapper: ServiceMapper,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn by_display_order<F>(&self, predicate: F) -> Vec<Service>
    where
        F: Fn(&ServiceEntity) -> bool,
    {
        let mut rows = self.store.filter(predicate).await;
        rows.sort_by_key(|row| row.display_order);
        rows.iter().map(|row| self.mapper.to_model(row)).collect()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Service>> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.store.get(key).await.map(|row| self.mapper.to_model(&row)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Service>> {
        let rows = self.store.filter(|_| true).await;
        Ok(rows.iter().map(|row| self.mapper.to_model(row)).collect())
    }

    async fn find_featured(&self) -> DomainResult<Vec<Service>> {
        Ok(self.by_display_order(|row| row.featured).await)
    }

    async fn find_ordered_by_display(&self) -> DomainResult<Vec<Service>> {
        Ok(self.by_display_order(|_| true).await)
    }

    async fn save(&self, service: &Service) -> DomainResult<Service> {
        Ok(self
            .store
            .upsert(&self.mapper, parse_id(&service.id), service)
            .await)
    }

    async fn update(&self, service: &Service) -> DomainResult<Service> {
        if service.id.trim().is_empty() {
            return Err(DomainError::validation("Service id must not be empty"));
        }
        let key = parse_id(&service.id)
            .ok_or_else(|| DomainError::not_found(format!("Service '{}' not found", service.id)))?;

        let mapper = self.mapper;
        let updated = self
            .store
            .modify(key, |row| mapper.update_entity(row, service))
            .await
            .ok_or_else(|| DomainError::not_found(format!("Service '{}' not found", service.id)))?;

        Ok(self.mapper.to_model(&updated))
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        if let Some(key) = parse_id(id) {
            self.store.remove(key).await;
        }
        Ok(true)
    }
}
