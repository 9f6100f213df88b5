use async_trait::async_trait;
use std::cmp::Reverse;

use super::in_memory_store::{paginate, InMemoryStore};
use crate::domain::error::DomainResult;
use crate::domain::identity::parse_id;
use crate::domain::project::Project;
use crate::domain::repositories::ProjectRepository;
use crate::infrastructure::entities::ProjectEntity;
use crate::infrastructure::mappers::{EntityMapper, ProjectMapper};

/// In-memory implementation of ProjectRepository
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    store: InMemoryStore<ProjectEntity>,
    mapper: ProjectMapper,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first; equal timestamps keep insertion order
    async fn sorted<F>(&self, predicate: F) -> Vec<Project>
    where
        F: Fn(&ProjectEntity) -> bool,
    {
        let mut rows = self.store.filter(predicate).await;
        rows.sort_by_key(|row| Reverse(row.created_at));
        rows.iter().map(|row| self.mapper.to_model(row)).collect()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.store.get(key).await.map(|row| self.mapper.to_model(&row)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Project>> {
        Ok(self.sorted(|_| true).await)
    }

    async fn find_featured(&self) -> DomainResult<Vec<Project>> {
        Ok(self.sorted(|row| row.featured).await)
    }

    async fn find_by_technology(&self, technology: &str) -> DomainResult<Vec<Project>> {
        let wanted = technology.trim().to_lowercase();
        Ok(self
            .sorted(|row| row.technologies.iter().any(|t| t.to_lowercase() == wanted))
            .await)
    }

    async fn find_by_page(&self, page: u32, size: u32) -> DomainResult<Vec<Project>> {
        Ok(paginate(self.sorted(|_| true).await, page, size))
    }

    async fn save(&self, project: &Project) -> DomainResult<Project> {
        Ok(self
            .store
            .upsert(&self.mapper, parse_id(&project.id), project)
            .await)
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        match parse_id(id) {
            Some(key) => Ok(self.store.remove(key).await),
            None => Ok(false),
        }
    }
}
