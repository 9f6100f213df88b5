//! Use-case layer called by the HTTP handlers
//!
//! Services orchestrate repository calls and build responses through the
//! mappers. "Not found" is reported as `Ok(None)` (or `Ok(false)` for
//! deletes); only rule violations such as a duplicate username are errors.

pub mod blog_service;
pub mod project_service;
pub mod service_service;
pub mod user_service;

pub use blog_service::BlogService;
pub use project_service::ProjectService;
pub use service_service::ServiceService;
pub use user_service::UserService;
