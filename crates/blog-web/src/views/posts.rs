//! Post pages: composer, detail view, and edit form

use blog_core::{FeedItem, Snowflake};
use maud::{html, Markup};

use super::layout::{delete_script, layout};

/// Form for writing a new post
pub fn compose_page(error: Option<&str>) -> Markup {
    layout(
        "New post",
        true,
        html! {
            h1 { "New post" }
            @if let Some(message) = error {
                p.error { (message) }
            }
            form method="post" action="/create-post" {
                label for="content" { "Content" }
                textarea name="content" id="content" rows="4" {}
                button type="submit" { "Publish" }
            }
        },
    )
}

/// A single post, with edit and delete controls for its author
pub fn post_page(post: &FeedItem, viewer: Option<Snowflake>) -> Markup {
    let own = post.is_authored_by(viewer);

    layout(
        "Post",
        viewer.is_some(),
        html! {
            article.post {
                .post-meta {
                    span.author { (post.author_username) }
                    time datetime=(post.created_at.to_rfc3339()) {
                        (post.created_at.format("%Y-%m-%d %H:%M"))
                    }
                }
                p { (post.content) }
                @if own {
                    .post-actions {
                        a href={ "/edit-post/" (post.id) } { "Edit" }
                        button.delete data-post-id=(post.id) { "Delete" }
                    }
                }
            }
            p { a href="/" { "Back to the feed" } }
            @if own {
                (delete_script())
            }
        },
    )
}

/// Edit form pre-filled with the post's content
pub fn edit_page(post_id: Snowflake, content: &str, error: Option<&str>) -> Markup {
    layout(
        "Edit post",
        true,
        html! {
            h1 { "Edit post" }
            @if let Some(message) = error {
                p.error { (message) }
            }
            form method="post" action={ "/edit-post/" (post_id) } {
                label for="content" { "Content" }
                textarea name="content" id="content" rows="4" { (content) }
                button type="submit" { "Save changes" }
            }
        },
    )
}
