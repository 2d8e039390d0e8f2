//! Post service
//!
//! Handles the paginated feed plus post creation, editing, and deletion.

use blog_core::entities::{FeedItem, Post};
use blog_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{FeedPage, PostContentRequest, PAGE_SIZE};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch one page of the feed, newest posts first
    ///
    /// Page numbers below 1 are clamped to the first page. Pages past the
    /// end come back empty but still carry a link to the previous page.
    #[instrument(skip(self))]
    pub async fn feed_page(&self, page: i64) -> ServiceResult<FeedPage> {
        let page = page.max(1);
        let offset = FeedPage::offset_for(page);

        let posts = self.ctx.post_repo().list_page(PAGE_SIZE, offset).await?;
        let total = self.ctx.post_repo().count().await?;

        Ok(FeedPage::new(posts, page, total))
    }

    /// Fetch a single post with its author's username
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<FeedItem> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    /// Create a post authored by the logged-in user
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: PostContentRequest,
    ) -> ServiceResult<Post> {
        request.validate()?;

        let post_id = self.ctx.generate_id();
        let post = Post::new(post_id, author_id, request.content);

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post_id, author_id = %author_id, "Post created");

        Ok(post)
    }

    /// Update a post's content, only if `author_id` wrote it
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        request: PostContentRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        self.ctx
            .post_repo()
            .update_content(post_id, author_id, &request.content)
            .await?;

        info!(post_id = %post_id, "Post updated");

        Ok(())
    }

    /// Delete a post, only if `author_id` wrote it
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Snowflake, author_id: Snowflake) -> ServiceResult<()> {
        self.ctx.post_repo().delete(post_id, author_id).await?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}
