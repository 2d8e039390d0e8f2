//! Feed and post handlers
//!
//! The feed and post detail render for everyone; composing, editing, and
//! deleting require a session. Edit and delete additionally require
//! authorship, surfaced as a 403 rather than a silent no-op.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use blog_core::{DomainError, Snowflake};
use blog_service::{DeleteResponse, FeedPage, PostContentRequest, PostService, ServiceError};
use maud::Markup;

use crate::extractors::{OptionalSessionUser, PageQuery, SessionUser};
use crate::response::{PageError, PageResult};
use crate::state::AppState;
use crate::views;

/// Paginated feed
///
/// GET /?page=N
pub async fn feed(
    State(state): State<AppState>,
    viewer: OptionalSessionUser,
    query: PageQuery,
) -> Markup {
    let service = PostService::new(state.service_context());

    match service.feed_page(query.page).await {
        Ok(feed) => views::feed_page(&feed, viewer.0, None),
        Err(e) => {
            tracing::error!(error = %e, page = query.page, "Failed to load feed");
            let empty = FeedPage {
                posts: Vec::new(),
                page: query.page,
                prev_page: None,
                next_page: None,
            };
            views::feed_page(&empty, viewer.0, Some("error fetching posts"))
        }
    }
}

/// Post composer
///
/// GET /create-post
pub async fn compose_form(_user: SessionUser) -> Markup {
    views::compose_page(None)
}

/// Publish a new post
///
/// POST /create-post
pub async fn create_post(
    State(state): State<AppState>,
    user: SessionUser,
    Form(request): Form<PostContentRequest>,
) -> PageResult<Redirect> {
    let service = PostService::new(state.service_context());
    service
        .create_post(user.user_id, request)
        .await
        .map_err(PageError::ComposeForm)?;

    Ok(Redirect::to("/"))
}

/// Single post page
///
/// GET /post/:post_id
pub async fn show_post(
    State(state): State<AppState>,
    viewer: OptionalSessionUser,
    Path(post_id): Path<String>,
) -> PageResult<Markup> {
    let logged_in = viewer.0.is_some();
    let post_id = parse_post_id(&post_id).ok_or(PageError::UnknownPost { logged_in })?;

    let service = PostService::new(state.service_context());
    let post = service
        .get_post(post_id)
        .await
        .map_err(|error| PageError::ErrorPage { logged_in, error })?;

    Ok(views::post_page(&post, viewer.0))
}

/// Edit form, pre-filled with the current content
///
/// GET /edit-post/:post_id
pub async fn edit_form(
    State(state): State<AppState>,
    user: SessionUser,
    Path(post_id): Path<String>,
) -> PageResult<Markup> {
    let post_id = parse_post_id(&post_id).ok_or(PageError::UnknownPost { logged_in: true })?;

    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await.map_err(|error| {
        PageError::ErrorPage {
            logged_in: true,
            error,
        }
    })?;

    if !post.is_authored_by(Some(user.user_id)) {
        return Err(PageError::ErrorPage {
            logged_in: true,
            error: ServiceError::from(DomainError::NotPostAuthor),
        });
    }

    Ok(views::edit_page(post.id, &post.content, None))
}

/// Save edited content
///
/// POST /edit-post/:post_id
pub async fn update_post(
    State(state): State<AppState>,
    user: SessionUser,
    Path(post_id): Path<String>,
    Form(request): Form<PostContentRequest>,
) -> PageResult<Redirect> {
    let post_id = parse_post_id(&post_id).ok_or(PageError::UnknownPost { logged_in: true })?;
    let content = request.content.clone();

    let service = PostService::new(state.service_context());
    service
        .update_post(post_id, user.user_id, request)
        .await
        .map_err(|error| {
            // Validation re-renders the form; ownership and missing-post
            // failures get the standalone error page.
            let is_validation = error.as_domain().is_some_and(DomainError::is_validation);
            if is_validation {
                PageError::EditForm {
                    post_id,
                    content,
                    error,
                }
            } else {
                PageError::ErrorPage {
                    logged_in: true,
                    error,
                }
            }
        })?;

    Ok(Redirect::to("/"))
}

/// Delete a post
///
/// DELETE /post/:post_id
///
/// Invoked from page scripts, so failures are plain text rather than a
/// rendered page.
pub async fn delete_post(
    State(state): State<AppState>,
    viewer: OptionalSessionUser,
    Path(post_id): Path<String>,
) -> PageResult<Json<DeleteResponse>> {
    let Some(user_id) = viewer.0 else {
        return Err(PageError::DeleteNotLoggedIn);
    };
    let post_id = parse_post_id(&post_id).ok_or(PageError::DeleteUnknownPost)?;

    let service = PostService::new(state.service_context());
    service
        .delete_post(post_id, user_id)
        .await
        .map_err(PageError::Delete)?;

    Ok(Json(DeleteResponse::deleted()))
}

/// Parse a post id path segment.
///
/// An id that does not parse cannot exist, so callers treat `None` as an
/// unknown post.
fn parse_post_id(raw: &str) -> Option<Snowflake> {
    raw.parse().ok()
}
