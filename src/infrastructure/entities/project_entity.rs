use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `projects` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProjectEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub model_url: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub demo_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
