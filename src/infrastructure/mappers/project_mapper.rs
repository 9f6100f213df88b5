use uuid::Uuid;

use super::EntityMapper;
use crate::domain::identity::parse_id;
use crate::domain::project::Project;
use crate::domain::timestamps::{format_timestamp, next_update, now, now_string, parse_timestamp};
use crate::dto::{CreateUpdateProjectRequest, ProjectResponse};
use crate::infrastructure::entities::ProjectEntity;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectMapper;

impl EntityMapper for ProjectMapper {
    type Entity = ProjectEntity;
    type Model = Project;
    type Request = CreateUpdateProjectRequest;
    type Response = ProjectResponse;

    fn to_model(&self, entity: &ProjectEntity) -> Project {
        Project {
            id: entity.id.to_string(),
            title: entity.title.clone(),
            description: entity.description.clone(),
            image_url: entity.image_url.clone(),
            model_url: entity.model_url.clone(),
            technologies: entity.technologies.clone(),
            github_url: entity.github_url.clone(),
            demo_url: entity.demo_url.clone(),
            created_at: Some(format_timestamp(entity.created_at)),
            updated_at: Some(format_timestamp(entity.updated_at)),
            featured: entity.featured,
        }
    }

    fn to_entity(&self, model: &Project) -> ProjectEntity {
        ProjectEntity {
            id: parse_id(&model.id).unwrap_or_else(Uuid::new_v4),
            title: model.title.clone(),
            description: model.description.clone(),
            image_url: model.image_url.clone(),
            model_url: model.model_url.clone(),
            technologies: model.technologies.clone(),
            github_url: model.github_url.clone(),
            demo_url: model.demo_url.clone(),
            featured: model.featured,
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

    fn update_entity(&self, entity: &mut ProjectEntity, model: &Project) {
        entity.title = model.title.clone();
        entity.description = model.description.clone();
        entity.image_url = model.image_url.clone();
        entity.model_url = model.model_url.clone();
        entity.technologies = model.technologies.clone();
        entity.github_url = model.github_url.clone();
        entity.demo_url = model.demo_url.clone();
        entity.featured = model.featured;
        entity.updated_at = next_update(entity.updated_at);
    }

    fn to_domain(
        &self,
        request: &CreateUpdateProjectRequest,
        existing: Option<&Project>,
    ) -> Project {
        let base = existing.cloned().unwrap_or_else(|| {
            let created = now_string();
            Project {
                created_at: Some(created.clone()),
                updated_at: Some(created),
                ..Project::default()
            }
        });

        Project {
            id: base.id,
            title: request.title.clone().unwrap_or(base.title),
            description: request.description.clone().unwrap_or(base.description),
            image_url: request.image_url.clone().unwrap_or(base.image_url),
            model_url: request.model_url.clone().unwrap_or(base.model_url),
            technologies: request.technologies.clone().unwrap_or(base.technologies),
            github_url: request.github_url.clone().unwrap_or(base.github_url),
            demo_url: request.demo_url.clone().unwrap_or(base.demo_url),
            created_at: base.created_at,
            updated_at: base.updated_at,
            featured: request.featured.unwrap_or(base.featured),
        }
    }

    fn to_response(&self, model: &Project) -> ProjectResponse {
        ProjectResponse {
            id: parse_id(&model.id),
            title: model.title.clone(),
            description: model.description.clone(),
            image_url: model.image_url.clone(),
            model_url: model.model_url.clone(),
            technologies: model.technologies.clone(),
            github_url: model.github_url.clone(),
            demo_url: model.demo_url.clone(),
            created_at: model.created_at.clone(),
            updated_at: model.updated_at.clone(),
            featured: model.featured,
        }
    }
}
