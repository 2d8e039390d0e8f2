//! Authentication handlers
//!
//! Registration, login, and logout. Login sets the session cookie;
//! logout destroys the server-side session and clears the cookie.

use axum::{extract::State, response::Redirect, Form};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use blog_service::{AuthService, LoginRequest, RegisterRequest};
use maud::Markup;

use crate::extractors::SESSION_COOKIE;
use crate::response::{PageError, PageResult};
use crate::state::AppState;
use crate::views;

/// Registration form
///
/// GET /register
pub async fn register_form() -> Markup {
    views::register_page(None)
}

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Form(request): Form<RegisterRequest>,
) -> PageResult<Redirect> {
    let service = AuthService::new(state.service_context());
    service
        .register(request)
        .await
        .map_err(PageError::RegisterForm)?;

    Ok(Redirect::to("/login"))
}

/// Login form
///
/// GET /login
pub async fn login_form() -> Markup {
    views::login_page(None)
}

/// Log in with a username or email
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> PageResult<(CookieJar, Redirect)> {
    let service = AuthService::new(state.service_context());
    let session_id = service.login(request).await.map_err(PageError::LoginForm)?;

    Ok((jar.add(session_cookie(session_id)), Redirect::to("/")))
}

/// Log out and clear the session cookie
///
/// GET /logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let service = AuthService::new(state.service_context());
        if let Err(e) = service.logout(cookie.value()).await {
            tracing::error!(error = %e, "Failed to destroy session");
            return (jar, Redirect::to("/"));
        }
    }

    (jar.remove(expired_session_cookie()), Redirect::to("/login"))
}

/// Session cookie scoped to the whole site.
///
/// The cookie carries no max-age; session lifetime is enforced
/// server-side by the store TTL.
fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Removal cookie matching the path of the one set at login
fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
