// Repository ports
// Each trait is implemented by a Postgres adapter and an in-memory adapter

pub mod blog_repository;
pub mod project_repository;
pub mod service_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use project_repository::ProjectRepository;
pub use service_repository::ServiceRepository;
pub use user_repository::UserRepository;
