use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `blog_posts` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BlogPostEntity {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub published: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
