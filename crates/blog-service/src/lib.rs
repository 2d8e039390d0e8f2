//! Application layer: the auth and post services, the shared context
//! they run against, and the DTOs the web layer consumes.

pub mod dto;
pub mod services;

pub use dto::{
    DeleteResponse, FeedPage, HealthResponse, LoginRequest, PostContentRequest, RegisterRequest,
    PAGE_SIZE,
};
pub use services::{
    AuthService, PostService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
