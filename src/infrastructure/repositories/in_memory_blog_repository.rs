use async_trait::async_trait;
use std::cmp::Reverse;

use super::in_memory_store::{paginate, InMemoryStore};
use crate::domain::blog::BlogPost;
use crate::domain::error::DomainResult;
use crate::domain::identity::parse_id;
use crate::domain::repositories::BlogRepository;
use crate::infrastructure::entities::BlogPostEntity;
use crate::infrastructure::mappers::{BlogMapper, EntityMapper};

/// In-memory implementation of BlogRepository
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    store: InMemoryStore<BlogPostEntity>,
    mapper: BlogMapper,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published rows matching `predicate`, latest publish date first
    async fn published<F>(&self, predicate: F) -> Vec<BlogPost>
    where
        F: Fn(&BlogPostEntity) -> bool,
    {
        let mut rows = self
            .store
            .filter(|row| row.published && predicate(row))
            .await;
        rows.sort_by_key(|row| Reverse((row.publish_date, row.created_at)));
        rows.iter().map(|row| self.mapper.to_model(row)).collect()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<BlogPost>> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.store.get(key).await.map(|row| self.mapper.to_model(&row)))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>> {
        let rows = self.store.filter(|row| row.slug == slug).await;
        Ok(rows.first().map(|row| self.mapper.to_model(row)))
    }

    async fn find_published_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>> {
        Ok(self.published(|row| row.slug == slug).await.into_iter().next())
    }

    async fn find_all(&self) -> DomainResult<Vec<BlogPost>> {
        let mut rows = self.store.filter(|_| true).await;
        rows.sort_by_key(|row| Reverse(row.created_at));
        Ok(rows.iter().map(|row| self.mapper.to_model(row)).collect())
    }

    async fn find_published(&self, page: u32, size: u32) -> DomainResult<Vec<BlogPost>> {
        Ok(paginate(self.published(|_| true).await, page, size))
    }

    async fn find_by_tag(&self, tag: &str, page: u32, size: u32) -> DomainResult<Vec<BlogPost>> {
        let wanted = tag.trim().to_lowercase();
        let tagged = self
            .published(|row| row.tags.iter().any(|t| t.to_lowercase() == wanted))
            .await;
        Ok(paginate(tagged, page, size))
    }

    async fn save(&self, post: &BlogPost) -> DomainResult<BlogPost> {
        Ok(self.store.upsert(&self.mapper, parse_id(&post.id), post).await)
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        match parse_id(id) {
            Some(key) => Ok(self.store.remove(key).await),
            None => Ok(false),
        }
    }
}
