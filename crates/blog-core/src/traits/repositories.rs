//! Ports the domain exposes to the storage layer
//!
//! blog-db implements these; the services consume them through trait
//! objects, which also lets tests substitute their own storage.

use async_trait::async_trait;

use crate::entities::{FeedItem, Post, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

pub type RepoResult<T> = Result<T, DomainError>;

/// Accounts and their password hashes
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// One query serves two callers: login passes the same credential in
    /// both positions, registration passes the submitted username and
    /// email to spot either duplicate.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> RepoResult<Option<User>>;

    /// Insert an account; the password arrives pre-hashed
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

/// Posts, always read together with their author's username
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One feed page, newest first
    async fn list_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<FeedItem>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<FeedItem>>;

    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Rewrite a post's content. The author id rides in the write
    /// predicate: a non-author edit touches zero rows and must come back
    /// as `NotPostAuthor`, a missing post as `PostNotFound`.
    async fn update_content(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        content: &str,
    ) -> RepoResult<()>;

    /// Remove a post under the same ownership rules as `update_content`
    async fn delete(&self, post_id: Snowflake, author_id: Snowflake) -> RepoResult<()>;
}
