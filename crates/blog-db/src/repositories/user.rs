//! User persistence on PostgreSQL
//!
//! The password hash lives in the same row as the profile but only
//! leaves this crate through [`get_password_hash`].
//!
//! [`get_password_hash`]: UserRepository::get_password_hash

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::User;
use blog_core::error::DomainError;
use blog_core::traits::{RepoResult, UserRepository};
use blog_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

const SELECT_BY_ID: &str =
    "SELECT id, username, email, password_hash, created_at FROM users WHERE id = $1";

const SELECT_BY_CREDENTIAL: &str = "SELECT id, username, email, password_hash, created_at \
     FROM users WHERE username = $1 OR email = $2 LIMIT 1";

const INSERT_USER: &str = "INSERT INTO users (id, username, email, password_hash, created_at) \
     VALUES ($1, $2, $3, $4, $5)";

const SELECT_HASH: &str = "SELECT password_hash FROM users WHERE id = $1";

/// [`UserRepository`] backed by the `users` table
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let row: Option<UserModel> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> RepoResult<Option<User>> {
        let row: Option<UserModel> = sqlx::query_as(SELECT_BY_CREDENTIAL)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(INSERT_USER)
            .bind(user.id.into_inner())
            .bind(&user.username)
            .bind(&user.email)
            .bind(password_hash)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::CredentialTaken))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let hash: Option<String> = sqlx::query_scalar(SELECT_HASH)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(hash)
    }
}
