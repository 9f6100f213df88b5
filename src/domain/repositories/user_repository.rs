use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::user::User;

/// Repository trait for User aggregate
///
/// Username uniqueness is checked by the service layer; adapters do not
/// all enforce it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// All users ordered by username
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Insert or update, same contract as the other repositories
    async fn save(&self, user: &User) -> DomainResult<User>;

    /// Stamp `last_login` (and `updated_at`) with the current time
    ///
    /// Returns `None` if the id does not resolve.
    async fn update_last_login(&self, id: &str) -> DomainResult<Option<User>>;

    /// Delete a user, returning whether a record was removed
    async fn delete_by_id(&self, id: &str) -> DomainResult<bool>;
}
