use uuid::Uuid;

use super::{non_blank, EntityMapper};
use crate::domain::blog::{generate_slug, BlogPost, PublicationState};
use crate::domain::identity::parse_id;
use crate::domain::timestamps::{format_timestamp, next_update, now, now_string, parse_timestamp};
use crate::dto::{BlogResponse, CreateUpdateBlogRequest};
use crate::infrastructure::entities::BlogPostEntity;

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogMapper;

impl BlogMapper {
    /// Slug for a merged post
    ///
    /// A non-blank requested slug wins verbatim. Otherwise an existing
    /// post keeps its slug and a new one gets a slug derived from `title`.
    fn resolve_slug(
        request: &CreateUpdateBlogRequest,
        existing: Option<&BlogPost>,
        title: &str,
    ) -> String {
        non_blank(request.slug.as_ref())
            .or_else(|| {
                existing
                    .filter(|post| !post.slug.trim().is_empty())
                    .map(|post| post.slug.clone())
            })
            .unwrap_or_else(|| generate_slug(title))
    }

    /// Publish date after moving from `previous` to `published`
    ///
    /// Stamped with the current time on Draft -> Published, and also when a
    /// published post somehow has no date. Otherwise left untouched,
    /// including on Published -> Draft.
    fn resolve_publish_date(
        previous: PublicationState,
        published: bool,
        current: Option<String>,
    ) -> Option<String> {
        let next = PublicationState::from_published(published);
        if previous.stamps_publish_date(next) || (published && current.is_none()) {
            Some(now_string())
        } else {
            current
        }
    }
}

impl EntityMapper for BlogMapper {
    type Entity = BlogPostEntity;
    type Model = BlogPost;
    type Request = CreateUpdateBlogRequest;
    type Response = BlogResponse;

    fn to_model(&self, entity: &BlogPostEntity) -> BlogPost {
        BlogPost {
            id: entity.id.to_string(),
            title: entity.title.clone(),
            summary: entity.summary.clone(),
            content: entity.content.clone(),
            image_url: entity.image_url.clone(),
            tags: entity.tags.clone(),
            publish_date: entity.publish_date.map(format_timestamp),
            created_at: Some(format_timestamp(entity.created_at)),
            updated_at: Some(format_timestamp(entity.updated_at)),
            published: entity.published,
            slug: entity.slug.clone(),
        }
    }

    fn to_entity(&self, model: &BlogPost) -> BlogPostEntity {
        BlogPostEntity {
            id: parse_id(&model.id).unwrap_or_else(Uuid::new_v4),
            title: model.title.clone(),
            summary: model.summary.clone(),
            content: model.content.clone(),
            image_url: model.image_url.clone(),
            tags: model.tags.clone(),
            slug: model.slug.clone(),
            published: model.published,
            publish_date: model.publish_date.as_deref().and_then(parse_timestamp),
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

    fn update_entity(&self, entity: &mut BlogPostEntity, model: &BlogPost) {
        entity.title = model.title.clone();
        entity.summary = model.summary.clone();
        entity.content = model.content.clone();
        entity.image_url = model.image_url.clone();
        entity.tags = model.tags.clone();
        entity.slug = model.slug.clone();
        entity.published = model.published;
        entity.publish_date = model.publish_date.as_deref().and_then(parse_timestamp);
        entity.updated_at = next_update(entity.updated_at);
    }

    fn to_domain(
        &self,
        request: &CreateUpdateBlogRequest,
        existing: Option<&BlogPost>,
    ) -> BlogPost {
        let previous = existing
            .map(BlogPost::state)
            .unwrap_or(PublicationState::Draft);
        let base = existing.cloned().unwrap_or_else(|| {
            let created = now_string();
            BlogPost {
                created_at: Some(created.clone()),
                updated_at: Some(created),
                ..BlogPost::default()
            }
        });

        let title = request.title.clone().unwrap_or(base.title);
        let slug = Self::resolve_slug(request, existing, &title);
        let published = request.published.unwrap_or(base.published);
        let publish_date = Self::resolve_publish_date(previous, published, base.publish_date);

        BlogPost {
            id: base.id,
            title,
            summary: request.summary.clone().unwrap_or(base.summary),
            content: request.content.clone().unwrap_or(base.content),
            image_url: request.image_url.clone().unwrap_or(base.image_url),
            tags: request.tags.clone().unwrap_or(base.tags),
            publish_date,
            created_at: base.created_at,
            updated_at: base.updated_at,
            published,
            slug,
        }
    }

    fn to_response(&self, model: &BlogPost) -> BlogResponse {
        BlogResponse {
            id: parse_id(&model.id),
            title: model.title.clone(),
            summary: model.summary.clone(),
            content: model.content.clone(),
            image_url: model.image_url.clone(),
            tags: model.tags.clone(),
            publish_date: model.publish_date.clone(),
            created_at: model.created_at.clone(),
            updated_at: model.updated_at.clone(),
            published: model.published,
            slug: model.slug.clone(),
            reading_time: model.reading_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BlogPost {
        BlogPost {
            id: Uuid::new_v4().to_string(),
            title: "My Post".to_string(),
            content: "Some words here".to_string(),
            slug: "my-post".to_string(),
            created_at: Some("2024-03-01T09:00:00.000000Z".to_string()),
            updated_at: Some("2024-03-01T09:00:00.000000Z".to_string()),
            ..BlogPost::default()
        }
    }

    #[test]
    fn new_post_slug_comes_from_title() {
        let request = CreateUpdateBlogRequest {
            title: Some("Hello, World! 2024".to_string()),
            ..Default::default()
        };

        let post = BlogMapper.to_domain(&request, None);

        assert_eq!(post.slug, "hello-world-2024");
        assert!(!post.published);
        assert!(post.publish_date.is_none());
    }

    #[test]
    fn requested_slug_wins_verbatim() {
        let request = CreateUpdateBlogRequest {
            title: Some("Anything".to_string()),
            slug: Some("Custom_Slug".to_string()),
            ..Default::default()
        };

        let post = BlogMapper.to_domain(&request, Some(&draft()));

        assert_eq!(post.slug, "Custom_Slug");
    }

    #[test]
    fn existing_slug_survives_retitle() {
        let request = CreateUpdateBlogRequest {
            title: Some("A Completely New Title".to_string()),
            slug: Some("  ".to_string()),
            ..Default::default()
        };

        let post = BlogMapper.to_domain(&request, Some(&draft()));

        assert_eq!(post.title, "A Completely New Title");
        assert_eq!(post.slug, "my-post");
    }

    #[test]
    fn existing_blank_slug_is_regenerated() {
        let mut current = draft();
        current.slug = String::new();

        let post = BlogMapper.to_domain(&CreateUpdateBlogRequest::default(), Some(&current));

        assert_eq!(post.slug, "my-post");
    }

    #[test]
    fn publishing_stamps_date_once() {
        let before = now();
        let publish = CreateUpdateBlogRequest {
            published: Some(true),
            ..Default::default()
        };

        let first = BlogMapper.to_domain(&publish, Some(&draft()));
        let stamped = first.publish_date.clone().expect("publish date set");
        let stamped_at = parse_timestamp(&stamped).unwrap();
        assert!(stamped_at >= before && stamped_at <= now());

        let second = BlogMapper.to_domain(&publish, Some(&first));
        assert_eq!(second.publish_date, Some(stamped));
    }

    #[test]
    fn unpublishing_keeps_date() {
        let mut current = draft();
        current.published = true;
        current.publish_date = Some("2024-03-02T10:00:00.000000Z".to_string());

        let request = CreateUpdateBlogRequest {
            published: Some(false),
            ..Default::default()
        };
        let post = BlogMapper.to_domain(&request, Some(&current));

        assert!(!post.published);
        assert_eq!(post.publish_date, current.publish_date);
    }

    #[test]
    fn republishing_moves_date() {
        let mut current = draft();
        current.publish_date = Some("2020-01-01T00:00:00.000000Z".to_string());

        let request = CreateUpdateBlogRequest {
            published: Some(true),
            ..Default::default()
        };
        let post = BlogMapper.to_domain(&request, Some(&current));

        assert_ne!(post.publish_date, current.publish_date);
    }

    #[test]
    fn create_published_stamps_date() {
        let request = CreateUpdateBlogRequest {
            title: Some("Launch".to_string()),
            published: Some(true),
            ..Default::default()
        };

        assert!(BlogMapper.to_domain(&request, None).publish_date.is_some());
    }

    #[test]
    fn response_carries_reading_time() {
        let mut post = draft();
        post.content = format!("<p>{}</p>", vec!["word"; 450].join(" "));

        let response = BlogMapper.to_response(&post);

        assert_eq!(response.reading_time, 3);
        assert_eq!(response.id.map(|id| id.to_string()), Some(post.id));
    }

    #[test]
    fn entity_round_trip_keeps_publish_date() {
        let mut post = draft();
        post.published = true;
        post.publish_date = Some("2024-03-02T10:00:00.000000Z".to_string());

        let back = BlogMapper.to_model(&BlogMapper.to_entity(&post));

        assert_eq!(back, post);
    }
}
