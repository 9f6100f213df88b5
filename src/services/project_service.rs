use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainResult;
use crate::domain::project::Project;
use crate::domain::repositories::ProjectRepository;
use crate::domain::timestamps::next_update_string;
use crate::dto::{CreateUpdateProjectRequest, ProjectListResponse, ProjectResponse};
use crate::infrastructure::mappers::{EntityMapper, ProjectMapper};

/// Project use cases
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
    mapper: ProjectMapper,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>, mapper: ProjectMapper) -> Self {
        Self { repository, mapper }
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Project>> {
        self.repository.find_all().await
    }

    pub async fn get_featured(&self) -> DomainResult<Vec<Project>> {
        self.repository.find_featured().await
    }

    pub async fn get_by_page(&self, page: u32, size: u32) -> DomainResult<Vec<Project>> {
        self.repository.find_by_page(page, size).await
    }

    pub async fn get_by_technology(&self, technology: &str) -> DomainResult<Vec<Project>> {
        self.repository.find_by_technology(technology).await
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        self.repository.find_by_id(id).await
    }

    /// Creates a project; both timestamps are set to the current time
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: &CreateUpdateProjectRequest) -> DomainResult<Project> {
        let project = self.mapper.to_domain(request, None);
        let saved = self.repository.save(&project).await?;
        info!(project_id = %saved.id, "Created project");
        Ok(saved)
    }

    /// Patches a project; `None` when the id does not resolve
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &CreateUpdateProjectRequest,
    ) -> DomainResult<Option<Project>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            debug!("Project not found for update");
            return Ok(None);
        };

        let merged = self.mapper.to_domain(request, Some(&existing));
        let saved = self.repository.save(&merged).await?;
        info!(project_id = %saved.id, "Updated project");
        Ok(Some(saved))
    }

    /// Flips `featured`; `None` when the id does not resolve
    #[instrument(skip(self))]
    pub async fn toggle_featured(&self, id: &str) -> DomainResult<Option<Project>> {
        let Some(mut project) = self.repository.find_by_id(id).await? else {
            debug!("Project not found for toggle");
            return Ok(None);
        };

        project.featured = !project.featured;
        project.updated_at = Some(next_update_string(project.updated_at.as_deref()));

        let saved = self.repository.save(&project).await?;
        info!(project_id = %saved.id, featured = saved.featured, "Toggled project featured flag");
        Ok(Some(saved))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> DomainResult<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!(deleted, "Deleted project");
        Ok(deleted)
    }

    pub fn to_response(&self, project: &Project) -> ProjectResponse {
        self.mapper.to_response(project)
    }

    pub fn to_list_response(&self, projects: &[Project]) -> ProjectListResponse {
        projects
            .iter()
            .map(|p| self.mapper.to_response(p))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryProjectRepository;

    fn service() -> ProjectService {
        ProjectService::new(Arc::new(InMemoryProjectRepository::new()), ProjectMapper)
    }

    fn titled(title: &str) -> CreateUpdateProjectRequest {
        CreateUpdateProjectRequest {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let service = service();

        let project = service.create(&titled("Foo")).await.unwrap();

        assert!(project.is_persisted());
        assert!(!project.featured);
        assert!(project.created_at.is_some());
        assert!(project.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let service = service();
        let result = service
            .update("3f1e7a4c-8d6b-4f7e-9a57-0c2d1b3e4f5a", &titled("x"))
            .await
            .unwrap();
        assert!(result.is_none());

        let malformed = service.update("nope", &titled("x")).await.unwrap();
        assert!(malformed.is_none());
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_none() {
        assert!(service().toggle_featured("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_response_counts_returned_items() {
        let service = service();
        for title in ["a", "b", "c"] {
            service.create(&titled(title)).await.unwrap();
        }

        let page = service.get_by_page(0, 2).await.unwrap();
        let response = service.to_list_response(&page);

        assert_eq!(response.count, 2);
        assert_eq!(response.projects.len(), 2);
    }

    #[tokio::test]
    async fn technology_filter_ignores_case() {
        let service = service();
        service
            .create(&CreateUpdateProjectRequest {
                title: Some("Orbit".to_string()),
                technologies: Some(vec!["Three.js".to_string()]),
                ..Default::default()
            })
            .await
            .unwrap();
        service.create(&titled("Plain")).await.unwrap();

        let found = service.get_by_technology("three.JS").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Orbit");
    }
}
