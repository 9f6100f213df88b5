use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::auth::PasswordHasher;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::UserRepository;
use crate::domain::user::User;
use crate::dto::{AuthRequest, CreateUpdateUserRequest, UserListResponse, UserResponse};
use crate::infrastructure::mappers::{EntityMapper, UserMapper};

/// Account management and authentication
///
/// Username uniqueness is enforced here, not by the repositories.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    mapper: UserMapper,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        mapper: UserMapper,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            repository,
            mapper,
            hasher,
        }
    }

    pub async fn get_all(&self) -> DomainResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.repository.find_by_id(id).await
    }

    pub async fn get_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.repository.find_by_username(username).await
    }

    /// Registers a new account with a hashed password
    ///
    /// # Errors
    /// `Validation` when the username or password is blank, `Conflict`
    /// when the username is taken.
    #[instrument(skip(self, request), fields(username = ?request.username))]
    pub async fn create_user(&self, request: &CreateUpdateUserRequest) -> DomainResult<User> {
        let username = required(request.username.as_deref(), "Username is required")?;
        let password = required(request.password.as_deref(), "Password is required")?;

        if self.repository.find_by_username(username).await?.is_some() {
            warn!("Rejected duplicate username");
            return Err(DomainError::conflict(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let hashed = CreateUpdateUserRequest {
            username: Some(username.to_string()),
            password: Some(self.hasher.hash(password)?),
            ..request.clone()
        };
        let user = self.mapper.to_domain(&hashed, None);
        let saved = self.repository.save(&user).await?;
        info!(user_id = %saved.id, role = %saved.role, "Created user");
        Ok(saved)
    }

    /// Patches an account; `None` when the id does not resolve
    ///
    /// A blank password leaves the stored hash alone, anything else is
    /// rehashed.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        id: &str,
        request: &CreateUpdateUserRequest,
    ) -> DomainResult<Option<User>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            debug!("User not found for update");
            return Ok(None);
        };

        let username = match request.username.as_deref() {
            Some(requested) => Some(required(Some(requested), "Username must not be blank")?),
            None => None,
        };
        if let Some(username) = username {
            if username != existing.username {
                if let Some(other) = self.repository.find_by_username(username).await? {
                    if other.id != existing.id {
                        warn!("Rejected rename to an existing username");
                        return Err(DomainError::conflict(format!(
                            "Username '{}' is already taken",
                            username
                        )));
                    }
                }
            }
        }

        let password = match request.password.as_deref() {
            Some(plain) if !plain.trim().is_empty() => Some(self.hasher.hash(plain)?),
            _ => None,
        };
        let patch = CreateUpdateUserRequest {
            username: username.map(str::to_string),
            password,
            ..request.clone()
        };

        let merged = self.mapper.to_domain(&patch, Some(&existing));
        let saved = self.repository.save(&merged).await?;
        info!(user_id = %saved.id, "Updated user");
        Ok(Some(saved))
    }

    /// Stamps `last_login` with the current time
    ///
    /// # Errors
    /// `Validation` for a blank id, before touching storage.
    #[instrument(skip(self))]
    pub async fn update_last_login(&self, id: &str) -> DomainResult<Option<User>> {
        if id.trim().is_empty() {
            return Err(DomainError::validation("User id is required"));
        }
        self.repository.update_last_login(id).await
    }

    /// Checks credentials; `None` for an unknown user, an inactive account
    /// or a wrong password. On success the login time is recorded.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn authenticate(&self, request: &AuthRequest) -> DomainResult<Option<User>> {
        let Some(user) = self.repository.find_by_username(&request.username).await? else {
            debug!("Unknown username");
            return Ok(None);
        };

        if !user.is_account_active {
            warn!(user_id = %user.id, "Login attempt on inactive account");
            return Ok(None);
        }

        if !self.hasher.verify(&request.password, &user.password) {
            warn!(user_id = %user.id, "Invalid password");
            return Ok(None);
        }

        let logged_in = self.update_last_login(&user.id).await?;
        info!(user_id = %user.id, "User authenticated");
        Ok(logged_in.or(Some(user)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> DomainResult<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!(deleted, "Deleted user");
        Ok(deleted)
    }

    pub fn to_response(&self, user: &User) -> UserResponse {
        self.mapper.to_response(user)
    }

    pub fn to_list_response(&self, users: &[User]) -> UserListResponse {
        users
            .iter()
            .map(|u| self.mapper.to_response(u))
            .collect::<Vec<_>>()
            .into()
    }
}

fn required<'a>(value: Option<&'a str>, message: &str) -> DomainResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::validation(message)),
    }
}
