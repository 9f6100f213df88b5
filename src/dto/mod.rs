//! Wire shapes exchanged with callers of the service layer
//!
//! Request fields are all optional: an absent field means "keep the current
//! value" on update and "use the default" on create. Responses always carry
//! every field, with an identity that is either a valid UUID or `null`.

pub mod blog;
pub mod project;
pub mod service;
pub mod user;

pub use blog::{BlogListResponse, BlogResponse, CreateUpdateBlogRequest};
pub use project::{CreateUpdateProjectRequest, ProjectListResponse, ProjectResponse};
pub use service::{CreateUpdateServiceRequest, ServiceListResponse, ServiceResponse};
pub use user::{AuthRequest, CreateUpdateUserRequest, UserListResponse, UserResponse};
