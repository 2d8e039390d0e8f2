//! HTML views rendered with maud
//!
//! Every page goes through the shared layout. All dynamic content is
//! escaped by maud; the only raw blocks are the inline stylesheet and
//! the delete script.

mod auth;
mod error;
mod feed;
mod layout;
mod posts;

pub use auth::{login_page, register_page};
pub use error::error_page;
pub use feed::feed_page;
pub use posts::{compose_page, edit_page, post_page};
