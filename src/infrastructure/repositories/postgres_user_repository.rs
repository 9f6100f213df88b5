use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::domain::error::DomainResult;
use crate::domain::identity::parse_id;
use crate::domain::repositories::UserRepository;
use crate::domain::timestamps::now_string;
use crate::domain::user::User;
use crate::infrastructure::entities::UserEntity;
use crate::infrastructure::mappers::{EntityMapper, UserMapper};

const SELECT_USERS: &str = r#"
    SELECT id, username, password, name, email, role, is_account_active,
           last_login, created_at, updated_at
    FROM users
"#;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
    mapper: UserMapper,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            mapper: UserMapper,
        }
    }

    async fn lock_row(
        conn: &mut PgConnection,
        id: uuid::Uuid,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(&format!("{} WHERE id = $1 FOR UPDATE", SELECT_USERS))
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    async fn write_update(conn: &mut PgConnection, entity: &UserEntity) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users SET
                username = $2, password = $3, name = $4, email = $5, role = $6,
                is_account_active = $7, last_login = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(entity.id)
        .bind(&entity.username)
        .bind(&entity.password)
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(&entity.role)
        .bind(entity.is_account_active)
        .bind(entity.last_login)
        .bind(entity.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, UserEntity>(&format!("{} WHERE id = $1", SELECT_USERS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserEntity>(&format!(
            "{} WHERE username = $1 ORDER BY created_at ASC LIMIT 1",
            SELECT_USERS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| self.mapper.to_model(&r)))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserEntity>(&format!("{} ORDER BY username", SELECT_USERS))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|r| self.mapper.to_model(r)).collect())
    }

    async fn save(&self, user: &User) -> DomainResult<User> {
        let mut tx = self.pool.begin().await?;

        let existing = match parse_id(&user.id) {
            Some(id) => Self::lock_row(&mut tx, id).await?,
            None => None,
        };

        let entity = match existing {
            Some(mut entity) => {
                self.mapper.update_entity(&mut entity, user);
                Self::write_update(&mut tx, &entity).await?;
                entity
            }
            None => {
                let entity = self.mapper.to_entity(user);
                sqlx::query(
                    r#"
                    INSERT INTO users (
                        id, username, password, name, email, role,
                        is_account_active, last_login, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    "#,
                )
                .bind(entity.id)
                .bind(&entity.username)
                .bind(&entity.password)
                .bind(&entity.name)
                .bind(&entity.email)
                .bind(&entity.role)
                .bind(entity.is_account_active)
                .bind(entity.last_login)
                .bind(entity.created_at)
                .bind(entity.updated_at)
                .execute(&mut *tx)
                .await?;
                entity
            }
        };

        tx.commit().await?;

        Ok(self.mapper.to_model(&entity))
    }

    async fn update_last_login(&self, id: &str) -> DomainResult<Option<User>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await?;

        let Some(mut entity) = Self::lock_row(&mut tx, id).await? else {
            return Ok(None);
        };

        let mut user = self.mapper.to_model(&entity);
        user.last_login = Some(now_string());
        self.mapper.update_entity(&mut entity, &user);
        Self::write_update(&mut tx, &entity).await?;

        tx.commit().await?;

        Ok(Some(self.mapper.to_model(&entity)))
    }

    async fn delete_by_id(&self, id: &str) -> DomainResult<bool> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
