//! Row structs deserialized straight from query results

mod post;
mod user;

pub use post::{FeedItemModel, PostModel};
pub use user::UserModel;
