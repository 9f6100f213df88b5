use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `services` table
///
/// `price` is kept as text exactly as it was written.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ServiceEntity {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub icon_class: String,
    pub price: Option<String>,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub display_order: i32,
    pub featured: bool,
    pub details_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
