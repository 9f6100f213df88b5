use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::Role;

/// Request body for creating or patching a user
///
/// A blank `password` keeps the stored hash on update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_account_active: Option<bool>,
}

/// Login credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// User as returned to clients; the password hash is never included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<Uuid>,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_login: Option<String>,
    pub is_account_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub count: usize,
}

impl From<Vec<UserResponse>> for UserListResponse {
    fn from(users: Vec<UserResponse>) -> Self {
        let count = users.len();
        Self { users, count }
    }
}
