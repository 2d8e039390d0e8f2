//! PostgreSQL persistence for the blog
//!
//! Implements the repository traits from `blog-core` with sqlx. The crate
//! splits into row models, `From` mappers onto domain entities, the pool
//! module with embedded migrations, and the repositories themselves.
//!
//! ```rust,ignore
//! use blog_db::{create_pool, run_migrations, DatabaseConfig, PgPostRepository};
//!
//! async fn wire_up() -> Result<PgPostRepository, Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     Ok(PgPostRepository::new(pool))
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPostRepository, PgUserRepository};
