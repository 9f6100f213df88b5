use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `users` table
///
/// `role` holds the uppercase role name.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_account_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
