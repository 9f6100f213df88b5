use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::service::Service;

/// Repository trait for Service offerings
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find a service by its ID, `None` when absent
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Service>>;

    /// All services in storage order
    async fn find_all(&self) -> DomainResult<Vec<Service>>;

    /// Featured services ordered by display order
    async fn find_featured(&self) -> DomainResult<Vec<Service>>;

    /// All services ascending by `display_order`
    ///
    /// Ties keep storage order, which is not guaranteed to be stable.
    async fn find_ordered_by_display(&self) -> DomainResult<Vec<Service>>;

    /// Insert or update, same contract as the other repositories
    async fn save(&self, service: &Service) -> DomainResult<Service>;

    /// Strict update of an existing service
    ///
    /// # Errors
    /// * `Validation` - if `service.id` is blank, before any I/O
    /// * `NotFound` - if the id does not resolve to a stored record
    async fn update(&self, service: &Service) -> DomainResult<Service>;

    /// Delete a service
    ///
    /// Returns `true` once the delete has been issued, whether or not a
    /// row existed. Callers relying on the other repositories' behaviour
    /// should check existence first.
    async fn delete_by_id(&self, id: &str) -> DomainResult<bool>;
}
