//! Redis-backed login sessions: opaque session IDs mapped to the
//! logged-in user, expiring on their own via key TTLs.
//!
//! ```ignore
//! use blog_session::{RedisPool, RedisPoolConfig, SessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let store = SessionStore::new(pool);
//!
//! let session_id = store.create(user_id).await?;
//! let data = store.get(&session_id).await?;
//! store.destroy(&session_id).await?;
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use session::{SessionData, SessionStore};
