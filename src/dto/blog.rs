use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for creating or patching a blog post
///
/// A blank `slug` means "derive it". The publish date is never taken from
/// the request; it is stamped when the post becomes published.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateBlogRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Option<Uuid>,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub publish_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published: bool,
    pub slug: String,
    /// Estimated minutes to read, never persisted
    pub reading_time: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogResponse>,
    pub count: usize,
}

impl From<Vec<BlogResponse>> for BlogListResponse {
    fn from(blogs: Vec<BlogResponse>) -> Self {
        let count = blogs.len();
        Self { blogs, count }
    }
}
