//! The two aggregates: accounts and posts

mod post;
mod user;

pub use post::{FeedItem, Post};
pub use user::User;
