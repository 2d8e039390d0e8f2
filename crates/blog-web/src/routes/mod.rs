//! The route table: pages, form submissions, and the delete endpoint.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, posts};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(auth_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Registration, login, and logout routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(auth::register_form))
        .route("/register", post(auth::register))
        .route("/login", get(auth::login_form))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Feed and post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::feed))
        .route("/create-post", get(posts::compose_form))
        .route("/create-post", post(posts::create_post))
        .route("/post/:post_id", get(posts::show_post))
        .route("/post/:post_id", delete(posts::delete_post))
        .route("/edit-post/:post_id", get(posts::edit_form))
        .route("/edit-post/:post_id", post(posts::update_post))
}
