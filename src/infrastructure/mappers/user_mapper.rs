use uuid::Uuid;

use super::{non_blank, EntityMapper};
use crate::domain::identity::parse_id;
use crate::domain::timestamps::{format_timestamp, next_update, now, now_string, parse_timestamp};
use crate::domain::user::{Role, User};
use crate::dto::{CreateUpdateUserRequest, UserResponse};
use crate::infrastructure::entities::UserEntity;

/// Maps users between storage, domain and wire shapes
///
/// `to_domain` expects `request.password` to already hold a hash; hashing
/// is the service's job. Unknown stored roles read as `Role::User`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl EntityMapper for UserMapper {
    type Entity = UserEntity;
    type Model = User;
    type Request = CreateUpdateUserRequest;
    type Response = UserResponse;

    fn to_model(&self, entity: &UserEntity) -> User {
        User {
            id: entity.id.to_string(),
            username: entity.username.clone(),
            password: entity.password.clone(),
            name: entity.name.clone(),
            email: entity.email.clone(),
            role: entity.role.parse().unwrap_or(Role::User),
            created_at: Some(format_timestamp(entity.created_at)),
            updated_at: Some(format_timestamp(entity.updated_at)),
            last_login: entity.last_login.map(format_timestamp),
            is_account_active: entity.is_account_active,
        }
    }

    fn to_entity(&self, model: &User) -> UserEntity {
        UserEntity {
            id: parse_id(&model.id).unwrap_or_else(Uuid::new_v4),
            username: model.username.clone(),
            password: model.password.clone(),
            name: model.name.clone(),
            email: model.email.clone(),
            role: model.role.as_str().to_string(),
            is_account_active: model.is_account_active,
            last_login: model.last_login.as_deref().and_then(parse_timestamp),
            created_at: model
                .created_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_else(now),
            updated_at: model
                .updated_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_else(now),
        }
    }

    fn update_entity(&self, entity: &mut UserEntity, model: &User) {
        entity.username = model.username.clone();
        if !model.password.trim().is_empty() {
            entity.password = model.password.clone();
        }
        entity.name = model.name.clone();
        entity.email = model.email.clone();
        entity.role = model.role.as_str().to_string();
        entity.is_account_active = model.is_account_active;
        entity.last_login = model.last_login.as_deref().and_then(parse_timestamp);
        entity.updated_at = next_update(entity.updated_at);
    }

    fn to_domain(&self, request: &CreateUpdateUserRequest, existing: Option<&User>) -> User {
        let base = existing.cloned().unwrap_or_else(|| {
            let created = now_string();
            User {
                role: Role::Contributor,
                is_account_active: true,
                created_at: Some(created.clone()),
                updated_at: Some(created),
                ..User::default()
            }
        });

        User {
            id: base.id,
            username: request.username.clone().unwrap_or(base.username),
            password: non_blank(request.password.as_ref()).unwrap_or(base.password),
            name: request.name.clone().unwrap_or(base.name),
            email: request.email.clone().unwrap_or(base.email),
            role: request.role.unwrap_or(base.role),
            created_at: base.created_at,
            updated_at: base.updated_at,
            last_login: base.last_login,
            is_account_active: request.is_account_active.unwrap_or(base.is_account_active),
        }
    }

    fn to_response(&self, model: &User) -> UserResponse {
        UserResponse {
            id: parse_id(&model.id),
            username: model.username.clone(),
            name: model.name.clone(),
            email: model.email.clone(),
            role: model.role,
            created_at: model.created_at.clone(),
            updated_at: model.updated_at.clone(),
            last_login: model.last_login.clone(),
            is_account_active: model.is_account_active,
        }
    }
}
