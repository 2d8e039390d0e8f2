//! Domain layer: entities, ids, errors, and the storage ports.
//!
//! Carries no database or web machinery; everything here is plain data
//! and traits, which keeps the layer trivially testable.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

pub use entities::{FeedItem, Post, User};
pub use error::DomainError;
pub use traits::{PostRepository, RepoResult, UserRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
