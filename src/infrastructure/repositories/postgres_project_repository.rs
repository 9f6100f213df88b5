use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::error::DomainResult;
use crate::domain::identity::parse_id;
use crate::domain::project::Project;
use crate::domain::repositories::ProjectRepository;
use crate::infrastructure::entities::ProjectEntity;
use crate::infrastructure::mappers::{EntityMapper, ProjectMapper};

const SELECT_PROJECTS: &str = r#"
    SELECT id, title, description, image_url, model_url, technologies,
           github_url, demo_url, featured, created_at, updated_at
    FROM projects
"#;

/// PostgreSQL implementation of ProjectRepository
pub struct PostgresProjectRepository {
    pool: PgPool,
    mapper: ProjectMapper,
}

impl PostgresProjectRepository {
    /// Creates a new PostgresProjectRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            mapper: ProjectMapper,
        }
    }

    fn to_models(&self, rows: Vec<ProjectEntity>) -> Vec<Project> {
        rows.iter().map(|row| self.mapper.to_model(row)).collect()
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ProjectEntity>(&format!("{} WHERE id = $1", SELECT_PROJECTS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectEntity>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_PROJECTS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn find_featured(&self) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectEntity>(&format!(
            "{} WHERE featured = TRUE ORDER BY created_at DESC",
            SELECT_PROJECTS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn find_by_technology(&self, technology: &str) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectEntity>(&format!(
            r#"{}
            WHERE EXISTS (
                SELECT 1 FROM unnest(technologies) AS tech
                WHERE lower(tech) = lower($1)
            )
            ORDER BY created_at DESC"#,
            SELECT_PROJECTS
        ))
        .bind(technology.trim())
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn find_by_page(&self, page: u32, size: u32) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectEntity>(&format!(
            "{} ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            SELECT_PROJECTS
        ))
        .bind(i64::from(size))
        .bind(i64::from(page) * i64::from(size))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn save(&self, project: &Project) -> DomainResult<Project> {
        let mut tx = self.pool.begin().await?;

        let existing = match parse_id(&project.id) {
            Some(id) => {
                sqlx::query_as::<_, ProjectEntity>(&format!(
                    "{} WHERE id = $1 FOR UPDATE",
                    SELECT_PROJECTS
                ))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
            }
            None => None,
        };

        let entity = match existing {
            Some(mut entity) => {
                self.mapper.update_entity(&mut entity, project);
                sqlx::query(
                    r#"
                    UPDATE projects SET
                        title = $2, description = $3, image_url = $4, model_url = $5,
                        technologies = $6, github_url = $7, demo_url = $8,
                        featured = $9, updated_at = $10
                    WHERE id = $1
                    "#,
                )
                .bind(entity.id)
                .bind(&entity.title)
                .bind(&entity.description)
                .bind(&entity.image_url)
                .bind(&entity.model_url)
                .bind(&entity.technologies)
                .bind(&entity.github_url)
                .bind(&entity.demo_url)
                .bind(entity.featured)
                .bind(entity.updated_at)
                .execute(&mut *tx)
                .await?;
                entity
            }
            None => {
                let entity = self.mapper.to_entity(project);
                sqlx::query(
                    r#"
                    INSERT INTO projects (
                        id, title, description, image_url, model_url, technologies,
                        github_url, demo_url, featured, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    "#,
                )
                .bind(entity.id)
                .bind(&entity.title)
                .bind(&entity.description)
                .bind(&entity.image_url)
                .bind(&entity.model_url)
                .bind(&entity.technologies)
                .bind(&entity.github_url)
                .bind(&entity.demo_url)
                .bind(entity.featured)
                .bind(entity.created_at)
                .bind(entity.updated_at)
                .execute(&mut *tx)
                .await?;
                entity
            }
        };

        tx.commit().await?;

        Ok(self.mapper.to_model(&entity))
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
