//! The services and the context they borrow from
//!
//! Each service is a thin borrowing wrapper over [`ServiceContext`];
//! handlers construct one per request.

pub mod auth;
pub mod context;
pub mod error;
pub mod post;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
