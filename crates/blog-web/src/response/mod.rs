//! Error-to-page mapping for the handlers
//!
//! Handlers return `PageResult<T>`. Each failure variant names the template
//! that renders it, so a validation failure re-renders the form it came
//! from with an inline message. Server errors are logged here and replaced
//! with generic text; internals never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use blog_core::Snowflake;
use blog_service::ServiceError;
use tracing::error;

use crate::views;

/// Type alias for page handler results
pub type PageResult<T> = Result<T, PageError>;

/// Failure responses for the page handlers
#[derive(Debug)]
pub enum PageError {
    /// The visitor must log in first
    LoginRedirect,

    /// Re-render the registration form with a message
    RegisterForm(ServiceError),

    /// Re-render the login form with a message
    LoginForm(ServiceError),

    /// Re-render the post composer with a message
    ComposeForm(ServiceError),

    /// Re-render the edit form with a message
    EditForm {
        post_id: Snowflake,
        content: String,
        error: ServiceError,
    },

    /// Standalone error page
    ErrorPage {
        logged_in: bool,
        error: ServiceError,
    },

    /// Error page for a post id that does not resolve
    UnknownPost { logged_in: bool },

    /// Plain 401 for the delete endpoint
    DeleteNotLoggedIn,

    /// Plain 404 for the delete endpoint
    DeleteUnknownPost,

    /// Plain-text rendering of a service failure on the delete endpoint
    Delete(ServiceError),
}

impl PageError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::LoginRedirect => StatusCode::SEE_OTHER,
            Self::RegisterForm(e)
            | Self::LoginForm(e)
            | Self::ComposeForm(e)
            | Self::EditForm { error: e, .. }
            | Self::ErrorPage { error: e, .. }
            | Self::Delete(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::UnknownPost { .. } | Self::DeleteUnknownPost => StatusCode::NOT_FOUND,
            Self::DeleteNotLoggedIn => StatusCode::UNAUTHORIZED,
        }
    }
}

/// The message shown to the user.
///
/// Client errors carry their own short message. Server errors are logged
/// and replaced with `fallback`.
fn user_message(error: &ServiceError, fallback: &str) -> String {
    if error.is_server_error() {
        error!(error = %error, code = error.error_code(), "Server error occurred");
        fallback.to_string()
    } else {
        error.to_string()
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::LoginRedirect => Redirect::to("/login").into_response(),
            Self::RegisterForm(error) => {
                let message = user_message(&error, "error registering user");
                (status, views::register_page(Some(&message))).into_response()
            }
            Self::LoginForm(error) => {
                let message = user_message(&error, "error logging in");
                (status, views::login_page(Some(&message))).into_response()
            }
            Self::ComposeForm(error) => {
                let message = user_message(&error, "error creating post");
                (status, views::compose_page(Some(&message))).into_response()
            }
            Self::EditForm {
                post_id,
                content,
                error,
            } => {
                let message = user_message(&error, "error updating post");
                (status, views::edit_page(post_id, &content, Some(&message))).into_response()
            }
            Self::ErrorPage { logged_in, error } => {
                let message = user_message(&error, "something went wrong");
                (status, views::error_page(&message, logged_in)).into_response()
            }
            Self::UnknownPost { logged_in } => {
                (status, views::error_page("post not found", logged_in)).into_response()
            }
            Self::DeleteNotLoggedIn => (status, "login required").into_response(),
            Self::DeleteUnknownPost => (status, "post not found").into_response(),
            Self::Delete(error) => {
                let message = user_message(&error, "error deleting post");
                (status, message).into_response()
            }
        }
    }
}
