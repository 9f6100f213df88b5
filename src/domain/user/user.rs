use super::value_objects::Role;

/// A site user
///
/// `password` always holds a hash, never plaintext, and is never exposed
/// through responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_login: Option<String>,
    pub is_account_active: bool,
}

impl User {
    /// Returns true once the user has been persisted
    pub fn is_persisted(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
