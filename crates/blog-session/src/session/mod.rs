//! The session store proper.
//!
//! A session is an opaque UUID handed to the browser in a cookie; which
//! user it belongs to is recorded only on the server side.

mod store;

pub use store::{SessionData, SessionStore};
