//! Session extractors
//!
//! Resolve the session cookie against the session store. `SessionUser`
//! rejects by redirecting to the login page; `OptionalSessionUser` never
//! rejects and serves pages that render for visitors too.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use blog_core::Snowflake;
use blog_service::AuthService;

use crate::response::PageError;
use crate::state::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session_id";

/// Authenticated user resolved from the session cookie
#[derive(Debug, Clone, Copy)]
pub struct SessionUser {
    /// User ID stored in the session
    pub user_id: Snowflake,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_session(parts, state).await {
            Some(user_id) => Ok(SessionUser { user_id }),
            None => Err(PageError::LoginRedirect),
        }
    }
}

/// Viewer identity for pages that render with or without a login
#[derive(Debug, Clone, Copy)]
pub struct OptionalSessionUser(pub Option<Snowflake>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalSessionUser(resolve_session(parts, state).await))
    }
}

/// Look up the session cookie in the session store.
///
/// An unknown or expired session reads as logged out. So does a store
/// failure, which is logged here.
async fn resolve_session<S>(parts: &mut Parts, state: &S) -> Option<Snowflake>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let jar = CookieJar::from_headers(&parts.headers);
    let session_id = jar.get(SESSION_COOKIE)?.value().to_string();

    let app_state = AppState::from_ref(state);
    let service = AuthService::new(app_state.service_context());

    match service.session_user(&session_id).await {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed");
            None
        }
    }
}
