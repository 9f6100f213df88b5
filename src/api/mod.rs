// API layer module (adapters for controllers)
// Thin axum handlers over the services

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{auth, blogs, projects, services, users};
pub use state::{AppState, JwtSettings, Repositories};

/// Builds the full application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/login", post(auth::login))
        // Project routes
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/api/projects/featured", get(projects::featured_projects))
        .route("/api/projects/page", get(projects::projects_page))
        .route(
            "/api/projects/technology/:technology",
            get(projects::projects_by_technology),
        )
        .route(
            "/api/projects/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/api/projects/:id/toggle-featured",
            post(projects::toggle_featured),
        )
        // Service routes
        .route(
            "/api/services",
            get(services::list_services).post(services::create_service),
        )
        .route("/api/services/featured", get(services::featured_services))
        .route(
            "/api/services/:id",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route(
            "/api/services/:id/toggle-featured",
            post(services::toggle_featured),
        )
        // Blog routes
        .route(
            "/api/blogs",
            get(blogs::list_published).post(blogs::create_blog),
        )
        .route("/api/blogs/all", get(blogs::list_all))
        .route("/api/blogs/slug/:slug", get(blogs::get_by_slug))
        .route("/api/blogs/tag/:tag", get(blogs::list_by_tag))
        .route(
            "/api/blogs/:id",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route(
            "/api/blogs/:id/toggle-published",
            post(blogs::toggle_published),
        )
        // User routes
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
