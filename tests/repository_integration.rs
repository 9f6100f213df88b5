//! Integration tests for repository layer
//!
//! These tests verify that the Postgres repositories honour the same
//! contract as the in-memory ones: upsert on save, `None` for missing or
//! malformed ids, ordering, and the strict service update.
//!
//! They need a database: set DATABASE_URL and run with `--ignored`.

use portfolio_api::domain::blog::BlogPost;
use portfolio_api::domain::error::DomainError;
use portfolio_api::domain::project::Project;
use portfolio_api::domain::repositories::{
    BlogRepository, ProjectRepository, ServiceRepository, UserRepository,
};
use portfolio_api::domain::service::Service;
use portfolio_api::domain::user::{Role, User};
use portfolio_api::infrastructure::repositories::{
    PostgresBlogRepository, PostgresProjectRepository, PostgresServiceRepository,
    PostgresUserRepository,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool with the schema applied
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Unique marker so parallel tests never see each other's rows
fn marker() -> String {
    format!("test-{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore]
async fn test_project_save_is_upsert() {
    let pool = setup_test_db().await;
    let repo = PostgresProjectRepository::new(pool);
    let title = marker();

    let created = repo
        .save(&Project {
            title: title.clone(),
            technologies: vec!["Rust".to_string()],
            ..Project::default()
        })
        .await
        .expect("Failed to insert project");
    assert!(!created.id.is_empty());

    let updated = repo
        .save(&Project {
            featured: true,
            ..created.clone()
        })
        .await
        .expect("Failed to update project");

    assert_eq!(updated.id, created.id);
    assert!(updated.featured);
    assert_eq!(updated.created_at, created.created_at);

    let matching: Vec<Project> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.title == title)
        .collect();
    assert_eq!(matching.len(), 1);

    assert!(repo.delete_by_id(&created.id).await.unwrap());
    assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_malformed_ids_are_not_found() {
    let pool = setup_test_db().await;
    let projects = PostgresProjectRepository::new(pool.clone());
    let users = PostgresUserRepository::new(pool);

    assert!(projects.find_by_id("not-a-uuid").await.unwrap().is_none());
    assert!(!projects.delete_by_id("not-a-uuid").await.unwrap());
    assert!(users.find_by_id("").await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_service_price_and_strict_update() {
    let pool = setup_test_db().await;
    let repo = PostgresServiceRepository::new(pool);

    let created = repo
        .save(&Service {
            title: marker(),
            price: Some(Decimal::new(14999, 2)),
            display_order: 3,
            ..Service::default()
        })
        .await
        .expect("Failed to insert service");
    assert_eq!(created.price, Some(Decimal::new(14999, 2)));

    let updated = repo
        .update(&Service {
            price: None,
            ..created.clone()
        })
        .await
        .expect("Failed to update service");
    assert_eq!(updated.price, None);

    let missing = repo
        .update(&Service {
            id: Uuid::new_v4().to_string(),
            ..Service::default()
        })
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));

    let blank = repo.update(&Service::default()).await;
    assert!(matches!(blank, Err(DomainError::Validation { .. })));

    assert!(repo.delete_by_id(&created.id).await.unwrap());
    assert!(repo.delete_by_id(&created.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_blog_published_queries() {
    let pool = setup_test_db().await;
    let repo = PostgresBlogRepository::new(pool);
    let tag = marker();
    let slug = marker();

    let draft = repo
        .save(&BlogPost {
            title: "Draft".to_string(),
            slug: slug.clone(),
            tags: vec![tag.clone()],
            ..BlogPost::default()
        })
        .await
        .unwrap();
    let live = repo
        .save(&BlogPost {
            title: "Live".to_string(),
            slug: slug.clone(),
            tags: vec![tag.clone()],
            published: true,
            publish_date: Some("2024-03-01T10:00:00.000000Z".to_string()),
            ..BlogPost::default()
        })
        .await
        .unwrap();

    let tagged = repo
        .find_by_tag(&tag.to_uppercase(), 0, 10)
        .await
        .unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].id, live.id);

    let oldest = repo.find_by_slug(&slug).await.unwrap();
    assert_eq!(oldest.map(|p| p.id), Some(draft.id.clone()));

    let public = repo.find_published_by_slug(&slug).await.unwrap();
    assert_eq!(public.map(|p| p.id), Some(live.id.clone()));

    repo.delete_by_id(&draft.id).await.unwrap();
    repo.delete_by_id(&live.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_user_last_login_and_role() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);
    let username = marker();

    let created = repo
        .save(&User {
            username: username.clone(),
            password: "$2b$04$placeholderhashplaceholderhashplaceholderha".to_string(),
            role: Role::Admin,
            is_account_active: true,
            ..User::default()
        })
        .await
        .unwrap();
    assert!(created.last_login.is_none());

    let logged_in = repo
        .update_last_login(&created.id)
        .await
        .unwrap()
        .expect("user exists");
    assert!(logged_in.last_login.is_some());
    assert_eq!(logged_in.role, Role::Admin);

    let found = repo.find_by_username(&username).await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(created.id.clone()));

    assert!(repo.delete_by_id(&created.id).await.unwrap());
}
