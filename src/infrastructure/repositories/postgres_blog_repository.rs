use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::blog::BlogPost;
use crate::domain::error::DomainResult;
use crate::domain::identity::parse_id;
use crate::domain::repositories::BlogRepository;
use crate::infrastructure::entities::BlogPostEntity;
use crate::infrastructure::mappers::{BlogMapper, EntityMapper};

const SELECT_POSTS: &str = r#"
    SELECT id, title, summary, content, image_url, tags, slug, published,
           publish_date, created_at, updated_at
    FROM blog_posts
"#;

/// PostgreSQL implementation of BlogRepository
pub struct PostgresBlogRepository {
    pool: PgPool,
    mapper: BlogMapper,
}

impl PostgresBlogRepository {
    /// Creates a new PostgresBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            mapper: BlogMapper,
        }
    }

    fn to_models(&self, rows: Vec<BlogPostEntity>) -> Vec<BlogPost> {
        rows.iter().map(|row| self.mapper.to_model(row)).collect()
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<BlogPost>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, BlogPostEntity>(&format!("{} WHERE id = $1", SELECT_POSTS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPostEntity>(&format!(
            "{} WHERE slug = $1 ORDER BY created_at ASC LIMIT 1",
            SELECT_POSTS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_published_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPostEntity>(&format!(
            r#"{}
            WHERE slug = $1 AND published = TRUE
            ORDER BY publish_date DESC NULLS LAST, created_at DESC
            LIMIT 1"#,
            SELECT_POSTS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_all(&self) -> DomainResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, BlogPostEntity>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_POSTS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn find_published(&self, page: u32, size: u32) -> DomainResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, BlogPostEntity>(&format!(
            r#"{}
            WHERE published = TRUE
            ORDER BY publish_date DESC NULLS LAST, created_at DESC
            LIMIT $1 OFFSET $2"#,
            SELECT_POSTS
        ))
        .bind(i64::from(size))
        .bind(i64::from(page) * i64::from(size))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn find_by_tag(&self, tag: &str, page: u32, size: u32) -> DomainResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, BlogPostEntity>(&format!(
            r#"{}
            WHERE published = TRUE
              AND EXISTS (
                  SELECT 1 FROM unnest(tags) AS t WHERE lower(t) = lower($1)
              )
            ORDER BY publish_date DESC NULLS LAST, created_at DESC
            LIMIT $2 OFFSET $3"#,
            SELECT_POSTS
        ))
        .bind(tag.trim())
        .bind(i64::from(size))
        .bind(i64::from(page) * i64::from(size))
        .fetch_all(&self.pool)
        .await?;

        Ok(self.to_models(rows))
    }

    async fn save(&self, post: &BlogPost) -> DomainResult<BlogPost> {
        let mut tx = self.pool.begin().await?;

        let existing = match parse_id(&post.id) {
            Some(id) => {
                sqlx::query_as::<_, BlogPostEntity>(&format!(
                    "{} WHERE id = $1 FOR UPDATE",
                    SELECT_POSTS
                ))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
            }
            None => None,
        };

        let entity = match existing {
            Some(mut entity) => {
                self.mapper.update_entity(&mut entity, post);
                sqlx::query(
                    r#"
                    UPDATE blog_posts SET
                        title = $2, summary = $3, content = $4, image_url = $5,
                        tags = $6, slug = $7, published = $8, publish_date = $9,
                        updated_at = $10
                    WHERE id = $1
                    "#,
                )
                .bind(entity.id)
                .bind(&entity.title)
                .bind(&entity.summary)
                .bind(&entity.content)
                .bind(&entity.image_url)
                .bind(&entity.tags)
                .bind(&entity.slug)
                .bind(entity.published)
                .bind(entity.publish_date)
                .bind(entity.updated_at)
                .execute(&mut *tx)
                .await?;
                entity
            }
            None => {
                let entity = self.mapper.to_entity(post);
                sqlx::query(
                    r#"
                    INSERT INTO blog_posts (
                        id, title, summary, content, image_url, tags, slug,
                        published, publish_date, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    "#,
                )
                .bind(entity.id)
                .bind(&entity.title)
                .bind(&entity.summary)
                .bind(&entity.content)
                .bind(&entity.image_url)
                .bind(&entity.tags)
                .bind(&entity.slug)
                .bind(entity.published)
                .bind(entity.publish_date)
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

        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
