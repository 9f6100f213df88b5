use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::domain::user::Role;
use crate::dto::CreateUpdateUserRequest;
use crate::services::UserService;

/// Seeds the configured admin account when it does not exist yet
///
/// Best effort: any failure is logged and startup carries on.
pub async fn seed_admin(users: &UserService, auth: &AuthConfig) {
    let Some((username, password)) = auth.bootstrap_admin() else {
        return;
    };

    match users.get_by_username(username).await {
        Ok(Some(_)) => {
            info!(username, "Admin account already present");
            return;
        }
        Ok(None) => {}
        Err(e) => {
            warn!(username, error = %e, "Could not check for admin account");
            return;
        }
    }

    let request = CreateUpdateUserRequest {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
        name: Some("Administrator".to_string()),
        role: Some(Role::Admin),
        is_account_active: Some(true),
        ..Default::default()
    };

    match users.create_user(&request).await {
        Ok(user) => info!(user_id = %user.id, username, "Seeded admin account"),
        Err(e) => warn!(username, error = %e, "Failed to seed admin account"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BcryptHasher;
    use crate::infrastructure::mappers::UserMapper;
    use crate::infrastructure::repositories::InMemoryUserRepository;
    use std::sync::Arc;

    fn users() -> UserService {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            UserMapper,
            Arc::new(BcryptHasher::new(4)),
        )
    }

    fn auth() -> AuthConfig {
        AuthConfig {
            admin_username: Some("admin".to_string()),
            admin_password: Some("change-me".to_string()),
            ..AuthConfig::default()
        }
    }

    #[tokio::test]
    async fn seeds_once() {
        let users = users();

        seed_admin(&users, &auth()).await;
        seed_admin(&users, &auth()).await;

        let all = users.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].role, Role::Admin);
    }

    #[tokio::test]
    async fn no_credentials_no_seed() {
        let users = users();
        seed_admin(&users, &AuthConfig::default()).await;
        assert!(users.get_all().await.unwrap().is_empty());
    }
}
