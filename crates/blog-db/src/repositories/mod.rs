//! Concrete repositories over the pool
//!
//! One repository per aggregate, each implementing its blog-core trait.
//! Shared sqlx error translation lives in the private `error` module.

mod error;
mod post;
mod user;

pub use post::PgPostRepository;
pub use user::PgUserRepository;
