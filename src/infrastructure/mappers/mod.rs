// Mappers between entities, models, requests and responses
//
// Mappers are pure: they never touch storage and never fail. Malformed
// ids degrade to "no identity" and malformed timestamps to "now".

pub mod blog_mapper;
pub mod project_mapper;
pub mod service_mapper;
pub mod user_mapper;

pub use blog_mapper::BlogMapper;
pub use project_mapper::ProjectMapper;
pub use service_mapper::ServiceMapper;
pub use user_mapper::UserMapper;

/// Conversion contract shared by every aggregate
pub trait EntityMapper: Send + Sync {
    type Entity;
    type Model;
    type Request;
    type Response;

    /// Storage row to domain model
    fn to_model(&self, entity: &Self::Entity) -> Self::Model;

    /// Domain model to a fresh storage row
    ///
    /// Uses the model's id when it parses, otherwise generates one.
    fn to_entity(&self, model: &Self::Model) -> Self::Entity;

    /// Copy every mutable field of `model` onto `entity` and refresh
    /// `updated_at`; the entity id is never changed
    fn update_entity(&self, entity: &mut Self::Entity, model: &Self::Model);

    /// Merge a partial request over an existing model
    ///
    /// Each field resolves as request, then existing, then default.
    fn to_domain(&self, request: &Self::Request, existing: Option<&Self::Model>) -> Self::Model;

    /// Domain model to the outward DTO
    fn to_response(&self, model: &Self::Model) -> Self::Response;
}

/// Prefers `value` when it has non-whitespace content
pub(crate) fn non_blank(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}
