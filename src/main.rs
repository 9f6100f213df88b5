use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use portfolio_api::api::{self, AppState, JwtSettings, Repositories};
use portfolio_api::auth::BcryptHasher;
use portfolio_api::bootstrap;
use portfolio_api::config::{AppConfig, DEV_JWT_SECRET};
use portfolio_api::infrastructure::repositories::{
    PostgresBlogRepository, PostgresProjectRepository, PostgresServiceRepository,
    PostgresUserRepository,
};
use portfolio_api::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    logging::init(&config.logging);

    if config.auth.jwt_secret == DEV_JWT_SECRET {
        tracing::warn!("JWT_SECRET not set, using development secret");
    }

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database connected and migrated");

    let repositories = Repositories {
        projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
        services: Arc::new(PostgresServiceRepository::new(pool.clone())),
        blogs: Arc::new(PostgresBlogRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool)),
    };
    let state = AppState::new(
        repositories,
        Arc::new(BcryptHasher::new(config.auth.bcrypt_cost)),
        JwtSettings {
            secret: config.auth.jwt_secret.clone(),
            lifetime_hours: config.auth.token_lifetime_hours,
        },
    );

    bootstrap::seed_admin(&state.users, &config.auth).await;

    let app = api::router(state);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
