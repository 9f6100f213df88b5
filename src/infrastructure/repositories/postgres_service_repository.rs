use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::identity::parse_id;
use crate::domain::repositories::ServiceRepository;
use crate::domain::service::Service;
use crate::infrastructure::entities::ServiceEntity;
use crate::infrastructure::mappers::{EntityMapper, ServiceMapper};

const SELECT_SERVICES: &str = r#"
    SELECT id, title, short_description, full_description, icon_class, price,
           features, cta_text, cta_link, display_order, featured, details_link,
           created_at, updated_at
    FROM services
"#;

/// PostgreSQL implementation of ServiceRepository
pub struct PostgresServiceRepository {
    pool: PgPool,
    mapper: ServiceMapper,
}

impl PostgresServiceRepository {
    /// Creates a new PostgresServiceRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            mapper: ServiceMapper,
        }
    }

    fn to_models(&self, rows: Vec<ServiceEntity>) -> Vec<Service> {
        rows.iter().map(|row| self.mapper.to_model(row)).collect()
    }

    async fn lock_row(
        conn: &mut PgConnection,
        id: uuid::Uuid,
    ) -> Result<Option<ServiceEntity>, sqlx::Error> {
        sqlx::query_as::<_, ServiceEntity>(&format!("{} WHERE id = $1 FOR UPDATE", SELECT_SERVICES))
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    async fn write_update(
        conn: &mut PgConnection,
        entity: &ServiceEntity,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE services SET
                title = $2, short_description = $3, full_description = $4,
                icon_class = $5, price = $6, features = $7, cta_text = $8,
                cta_link = $9, display_order = $10, featured = $11,
                details_link = $12, updated_at = $13
            WHERE id = $1
            "#,
        )
        .bind(entity.id)
        .bind(&entity.title)
        .bind(&entity.short_description)
        .bind(&entity.full_description)
        .bind(&entity.icon_class)
        .bind(&entity.price)
        .bind(&entity.features)
        .bind(&entity.cta_text)
        .bind(&entity.cta_link)
        .bind(entity.display_order)
        .bind(entity.featured)
        .bind(&entity.details_link)
        .bind(entity.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Service>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ServiceEntity>(&format!("{} WHERE id = $1", SELECT_SERVICES))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, ServiceEntity>(SELECT_SERVICES)
            .fetch_all(&self.pool)
            .await?;

        Ok(self.to_models(rows))
    }

    async fn find_featured(&self) -> DomainResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, ServiceEntity>(&format!(
            "{} WHERE featured = TRUE ORDER BY display_order ASC",
            SELECT_SERVICES
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn find_ordered_by_display(&self) -> DomainResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, ServiceEntity>(&format!(
            "{} ORDER BY display_order ASC",
            SELECT_SERVICES
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn save(&self, service: &Service) -> DomainResult<Service> {
        let mut tx = self.pool.begin().await?;

        let existing = match parse_id(&service.id) {
            Some(id) => Self::lock_row(&mut tx, id).await?,
            None => None,
        };

        let entity = match existing {
            Some(mut entity) => {
                self.mapper.update_entity(&mut entity, service);
                Self::write_update(&mut tx, &entity).await?;
                entity
            }
            None => {
                let entity = self.mapper.to_entity(service);
                sqlx::query(
                    r#"
                    INSERT INTO services (
                        id, title, short_description, full_description, icon_class,
                        price, features, cta_text, cta_link, display_order, featured,
                        details_link, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                    "#,
                )
                .bind(entity.id)
                .bind(&entity.title)
                .bind(&entity.short_description)
                .bind(&entity.full_description)
                .bind(&entity.icon_class)
                .bind(&entity.price)
                .bind(&entity.features)
                .bind(&entity.cta_text)
                .bind(&entity.cta_link)
                .bind(entity.display_order)
                .bind(entity.featured)
                .bind(&entity.details_link)
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

    async fn update(&self, service: &Service) -> DomainResult<Service> {
        if service.id.trim().is_empty() {
            return Err(DomainError::validation("Service id must not be empty"));
        }
        let id = parse_id(&service.id)
            .ok_or_else(|| DomainError::not_found(format!("Service '{}' not found", service.id)))?;

        let mut tx = self.pool.begin().await?;

        let mut entity = Self::lock_row(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Service '{}' not found", service.id)))?;

        self.mapper.update_entity(&mut entity, service);
        Self::write_update(&mut tx, &entity).await?;

        tx.commit().await?;

        Ok(self.mapper.to_model(&entity))
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        if let Some(id) = parse_id(id) {
            sqlx::query("DELETE FROM services WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
        }

        Ok(true)
    }
}
