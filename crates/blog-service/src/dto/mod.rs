//! Validated form input on the way in, view models on the way out

pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, PostContentRequest, RegisterRequest};
pub use responses::{DeleteResponse, FeedPage, HealthResponse, PAGE_SIZE};
