//! Post entity - a short text entry in the feed

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user wrote this post
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Check if post content is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Read model for rendering: a post joined with its author's username.
/// Feed ordering is newest-first by id (ids are time-ordered).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl FeedItem {
    /// Check whether the viewer (if logged in) wrote this post.
    /// Drives conditional UI such as edit and delete controls.
    pub fn is_authored_by(&self, viewer_id: Option<Snowflake>) -> bool {
        viewer_id == Some(self.author_id)
    }
}
