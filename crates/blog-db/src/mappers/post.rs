//! Post model -> entity mappers

use blog_core::entities::{FeedItem, Post};
use blog_core::value_objects::Snowflake;

use crate::models::{FeedItemModel, PostModel};

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}

/// Convert FeedItemModel to FeedItem read model
impl From<FeedItemModel> for FeedItem {
    fn from(model: FeedItemModel) -> Self {
        FeedItem {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            author_username: model.author_username,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
