//! Dependency container shared by the services.
//!
//! One `ServiceContext` is built at startup and cloned into handlers;
//! repositories sit behind trait objects so tests can substitute them.

use std::sync::Arc;

use blog_core::traits::{PostRepository, UserRepository};
use blog_core::SnowflakeGenerator;
use blog_db::PgPool;
use blog_session::SessionStore;

use super::error::{ServiceError, ServiceResult};

/// Everything a service call can reach
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    session_store: SessionStore,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// The PostgreSQL pool, for health probes
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    /// Mint an id for a new user or post
    pub fn generate_id(&self) -> blog_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

/// Step-by-step construction of a [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    session_store: Option<SessionStore>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    #[must_use]
    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn session_store(mut self, store: SessionStore) -> Self {
        self.session_store = Some(store);
        self
    }

    #[must_use]
    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Finish the build
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` naming the first missing dependency.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn missing(field: &str) -> ServiceError {
            ServiceError::validation(format!("{field} is required"))
        }

        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| missing("pool"))?,
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            post_repo: self.post_repo.ok_or_else(|| missing("post_repo"))?,
            session_store: self.session_store.ok_or_else(|| missing("session_store"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| missing("snowflake_generator"))?,
        })
    }
}
