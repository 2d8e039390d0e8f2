//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{FeedItem, Post};
use blog_core::error::DomainError;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::FeedItemModel;

use super::error::{map_db_error, post_not_found};

/// PostgreSQL implementation of PostRepository
///
/// `update_content` and `delete` carry the author in the WHERE clause, so
/// ownership is enforced by the database in the same statement that mutates
/// the row.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A zero-row UPDATE or DELETE means the post is missing or belongs to
    /// someone else. Probe existence to tell the two apart.
    async fn classify_missing_row(&self, id: Snowflake) -> DomainError {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await;

        match exists {
            Ok(true) => DomainError::NotPostAuthor,
            Ok(false) => post_not_found(id),
            Err(e) => map_db_error(e),
        }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn list_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<FeedItem>> {
        let rows = sqlx::query_as::<_, FeedItemModel>(
            r"
            SELECT p.id, p.author_id, u.username AS author_username, p.content, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.author_id
            ORDER BY p.id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FeedItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<FeedItem>> {
        let result = sqlx::query_as::<_, FeedItemModel>(
            r"
            SELECT p.id, p.author_id, u.username AS author_username, p.content, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FeedItem::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(&post.content)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_content(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        content: &str,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET content = $3
            WHERE id = $1 AND author_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .bind(content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missing_row(post_id).await);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: Snowflake, author_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM posts
            WHERE id = $1 AND author_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missing_row(post_id).await);
        }

        Ok(())
    }
}
