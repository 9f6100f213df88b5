use async_trait::async_trait;

use crate::domain::blog::{generate_slug, BlogPost};
use crate::domain::error::DomainResult;

/// Repository trait for BlogPost aggregate
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find a post by its ID regardless of publication state
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<BlogPost>>;

    /// Find a post by slug regardless of publication state
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>>;

    /// Latest published post carrying `slug`; drafts never match
    async fn find_published_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>>;

    /// Every post including drafts, newest first
    async fn find_all(&self) -> DomainResult<Vec<BlogPost>>;

    /// One page of published posts, latest publish date first
    async fn find_published(&self, page: u32, size: u32) -> DomainResult<Vec<BlogPost>>;

    /// One page of published posts carrying `tag` (case-insensitive)
    async fn find_by_tag(&self, tag: &str, page: u32, size: u32) -> DomainResult<Vec<BlogPost>>;

    /// Insert or update, same contract as the other repositories
    async fn save(&self, post: &BlogPost) -> DomainResult<BlogPost>;

    /// Delete a post, returning whether a record was removed
    async fn delete_by_id(&self, id: &str) -> DomainResult<bool>;

    /// Slug for a title; pure, performs no I/O
    fn generate_slug(&self, title: &str) -> String {
        generate_slug(title)
    }
}
