//! Axum extractors for request handling
//!
//! Custom extractors for the session cookie and the feed page number.

mod page;
mod session;

pub use page::{PageParams, PageQuery};
pub use session::{OptionalSessionUser, SessionUser, SESSION_COOKIE};
