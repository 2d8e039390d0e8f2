//! Shared application state.
//!
//! Configuration is consumed during wiring (session TTL, worker id,
//! listen address), so handlers only ever need the service context.

use std::sync::Arc;

use blog_service::ServiceContext;

/// State cloned into every handler
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
}

impl AppState {
    pub fn new(service_context: ServiceContext) -> Self {
        Self {
            service_context: Arc::new(service_context),
        }
    }

    /// The repositories, session store and id generator behind one handle
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
