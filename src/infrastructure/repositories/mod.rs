// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_blog_repository;
pub mod in_memory_project_repository;
pub mod in_memory_service_repository;
pub mod in_memory_store;
pub mod in_memory_user_repository;
pub mod postgres_blog_repository;
pub mod postgres_project_repository;
pub mod postgres_service_repository;
pub mod postgres_user_repository;

pub use in_memory_blog_repository::InMemoryBlogRepository;
pub use in_memory_project_repository::InMemoryProjectRepository;
pub use in_memory_service_repository::InMemoryServiceRepository;
pub use in_memory_store::InMemoryStore;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use postgres_blog_repository::PostgresBlogRepository;
pub use postgres_project_repository::PostgresProjectRepository;
pub use postgres_service_repository::PostgresServiceRepository;
pub use postgres_user_repository::PostgresUserRepository;
