// Persisted entity records
// Shaped like the storage rows: generated keys, collection columns,
// audit timestamps, and stringly typed role/price columns

pub mod blog_post_entity;
pub mod project_entity;
pub mod service_entity;
pub mod user_entity;

pub use blog_post_entity::BlogPostEntity;
pub use project_entity::ProjectEntity;
pub use service_entity::ServiceEntity;
pub use user_entity::UserEntity;
