use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::domain::repositories::{
    BlogRepository, ProjectRepository, ServiceRepository, UserRepository,
};
use crate::infrastructure::mappers::{BlogMapper, ProjectMapper, ServiceMapper, UserMapper};
use crate::services::{BlogService, ProjectService, ServiceService, UserService};

/// Token signing settings shared by login and the extractors
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub lifetime_hours: i64,
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectService>,
    pub services: Arc<ServiceService>,
    pub blogs: Arc<BlogService>,
    pub users: Arc<UserService>,
    pub jwt: JwtSettings,
}

/// Storage adapters the services are built on
pub struct Repositories {
    pub projects: Arc<dyn ProjectRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        hasher: Arc<dyn PasswordHasher>,
        jwt: JwtSettings,
    ) -> Self {
        Self {
            projects: Arc::new(ProjectService::new(repositories.projects, ProjectMapper)),
            services: Arc::new(ServiceService::new(repositories.services, ServiceMapper)),
            blogs: Arc::new(BlogService::new(repositories.blogs, BlogMapper)),
            users: Arc::new(UserService::new(repositories.users, UserMapper, hasher)),
            jwt,
        }
    }
}
