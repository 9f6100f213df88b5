use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::project::Project;

/// Repository trait for Project aggregate
///
/// Ids are the string form of the storage key. A blank or malformed id
/// never matches a record.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find a project by its ID, `None` when absent
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>>;

    /// All projects, newest first
    async fn find_all(&self) -> DomainResult<Vec<Project>>;

    /// Projects flagged as featured, newest first
    async fn find_featured(&self) -> DomainResult<Vec<Project>>;

    /// Projects listing the given technology (case-insensitive)
    async fn find_by_technology(&self, technology: &str) -> DomainResult<Vec<Project>>;

    /// One page of projects, newest first; `page` is zero-based
    async fn find_by_page(&self, page: u32, size: u32) -> DomainResult<Vec<Project>>;

    /// Insert or update
    ///
    /// Updates when `project.id` resolves to a stored record, otherwise
    /// inserts a new record with a generated id.
    async fn save(&self, project: &Project) -> DomainResult<Project>;

    /// Delete a project, returning whether a record was removed
    async fn delete_by_id(&self, id: &str) -> DomainResult<bool>;
}
