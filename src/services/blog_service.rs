use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::blog::BlogPost;
use crate::domain::error::DomainResult;
use crate::domain::repositories::BlogRepository;
use crate::dto::{BlogListResponse, BlogResponse, CreateUpdateBlogRequest};
use crate::infrastructure::mappers::{BlogMapper, EntityMapper};

/// Blog use cases
///
/// Public reads only ever see published posts; `get_all` and `get_by_id`
/// are the admin views and include drafts.
pub struct BlogService {
    repository: Arc<dyn BlogRepository>,
    mapper: BlogMapper,
}

impl BlogService {
    pub fn new(repository: Arc<dyn BlogRepository>, mapper: BlogMapper) -> Self {
        Self { repository, mapper }
    }

    pub async fn get_all(&self) -> DomainResult<Vec<BlogPost>> {
        self.repository.find_all().await
    }

    pub async fn get_published(&self, page: u32, size: u32) -> DomainResult<Vec<BlogPost>> {
        self.repository.find_published(page, size).await
    }

    pub async fn get_by_tag(&self, tag: &str, page: u32, size: u32) -> DomainResult<Vec<BlogPost>> {
        self.repository.find_by_tag(tag, page, size).await
    }

    /// Latest published post for `slug`; drafts sharing the slug are skipped
    pub async fn get_by_slug(&self, slug: &str) -> DomainResult<Option<BlogPost>> {
        self.repository.find_published_by_slug(slug).await
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Option<BlogPost>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: &CreateUpdateBlogRequest) -> DomainResult<BlogPost> {
        let post = self.mapper.to_domain(request, None);
        let saved = self.repository.save(&post).await?;
        info!(
            post_id = %saved.id,
            slug = %saved.slug,
            published = saved.published,
            "Created blog post"
        );
        Ok(saved)
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &CreateUpdateBlogRequest,
    ) -> DomainResult<Option<BlogPost>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            debug!("Blog post not found for update");
            return Ok(None);
        };

        let merged = self.mapper.to_domain(request, Some(&existing));
        let saved = self.repository.save(&merged).await?;
        info!(post_id = %saved.id, published = saved.published, "Updated blog post");
        Ok(Some(saved))
    }

    /// Flips `published`, stamping the publish date when going live
    #[instrument(skip(self))]
    pub async fn toggle_published(&self, id: &str) -> DomainResult<Option<BlogPost>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            debug!("Blog post not found for toggle");
            return Ok(None);
        };

        let request = CreateUpdateBlogRequest {
            published: Some(!existing.published),
            ..Default::default()
        };
        let toggled = self.mapper.to_domain(&request, Some(&existing));
        let saved = self.repository.save(&toggled).await?;
        info!(post_id = %saved.id, published = saved.published, "Toggled blog post publication");
        Ok(Some(saved))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> DomainResult<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!(deleted, "Deleted blog post");
        Ok(deleted)
    }

    /// Slug a title would get if created without one
    pub fn generate_slug(&self, title: &str) -> String {
        self.repository.generate_slug(title)
    }

    pub fn to_response(&self, post: &BlogPost) -> BlogResponse {
        self.mapper.to_response(post)
    }

    pub fn to_list_response(&self, posts: &[BlogPost]) -> BlogListResponse {
        posts
            .iter()
            .map(|p| self.mapper.to_response(p))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryBlogRepository;

    fn service() -> BlogService {
        BlogService::new(Arc::new(InMemoryBlogRepository::new()), BlogMapper)
    }

    fn post(title: &str, published: bool) -> CreateUpdateBlogRequest {
        CreateUpdateBlogRequest {
            title: Some(title.to_string()),
            content: Some("<p>Some words here</p>".to_string()),
            published: Some(published),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn slug_lookup_hides_drafts() {
        let service = service();
        service.create(&post("Draft Thoughts", false)).await.unwrap();
        service.create(&post("Live Thoughts", true)).await.unwrap();

        assert!(service.get_by_slug("draft-thoughts").await.unwrap().is_none());
        assert!(service.get_by_slug("live-thoughts").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn slug_lookup_skips_older_draft_with_same_slug() {
        let service = service();
        let draft = service.create(&post("Hello", false)).await.unwrap();
        let live = service.create(&post("Hello", true)).await.unwrap();
        assert_eq!(draft.slug, live.slug);

        let found = service.get_by_slug("hello").await.unwrap();

        assert_eq!(found.map(|p| p.id), Some(live.id));
    }

    #[tokio::test]
    async fn toggle_publishes_and_stamps_date() {
        let service = service();
        let draft = service.create(&post("Hello", false)).await.unwrap();
        assert!(draft.publish_date.is_none());

        let live = service.toggle_published(&draft.id).await.unwrap().unwrap();
        assert!(live.published);
        assert!(live.publish_date.is_some());

        let back = service.toggle_published(&draft.id).await.unwrap().unwrap();
        assert!(!back.published);
        assert_eq!(back.publish_date, live.publish_date);
    }

    #[tokio::test]
    async fn update_keeps_slug_when_title_changes() {
        let service = service();
        let created = service.create(&post("Original Title", true)).await.unwrap();

        let request = CreateUpdateBlogRequest {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = service.update(&created.id, &request).await.unwrap().unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.slug, "original-title");
    }

    #[test]
    fn slug_preview_matches_created_slug() {
        assert_eq!(service().generate_slug("Hello, World! 2024"), "hello-world-2024");
    }

    #[tokio::test]
    async fn published_listing_excludes_drafts() {
        let service = service();
        service.create(&post("One", true)).await.unwrap();
        service.create(&post("Two", false)).await.unwrap();

        let published = service.get_published(0, 10).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }
}
