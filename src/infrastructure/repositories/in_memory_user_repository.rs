use async_trait::async_trait;

use super::in_memory_store::InMemoryStore;
use crate::domain::error::DomainResult;
use crate::domain::identity::parse_id;
use crate::domain::repositories::UserRepository;
use crate::domain::timestamps::now_string;
use crate::domain::user::User;
use crate::infrastructure::entities::UserEntity;
use crate::infrastructure::mappers::{EntityMapper, UserMapper};

/// In-memory implementation of UserRepository
///
/// Like the Postgres adapter it does not enforce username uniqueness.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: InMemoryStore<UserEntity>,
    mapper: UserMapper,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.store.get(key).await.map(|row| self.mapper.to_model(&row)))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let rows = self.store.filter(|row| row.username == username).await;
        Ok(rows.first().map(|row| self.mapper.to_model(row)))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let mut rows = self.store.filter(|_| true).await;
        rows.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(rows.iter().map(|row| self.mapper.to_model(row)).collect())
    }

    async fn save(&self, user: &User) -> DomainResult<User> {
        Ok(self.store.upsert(&self.mapper, parse_id(&user.id), user).await)
    }

    async fn update_last_login(&self, id: &str) -> DomainResult<Option<User>> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };

        let mapper = self.mapper;
        let updated = self
            .store
            .modify(key, |row| {
                let mut user = mapper.to_model(row);
                user.last_login = Some(now_string());
                mapper.update_entity(row, &user);
            })
            .await;

        Ok(updated.map(|row| self.mapper.to_model(&row)))
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        match parse_id(id) {
            Some(key) => Ok(self.store.remove(key).await),
            None => Ok(false),
        }
    }
}
