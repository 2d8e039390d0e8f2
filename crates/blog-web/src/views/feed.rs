//! Feed page

use blog_core::Snowflake;
use blog_service::FeedPage;
use maud::{html, Markup};

use super::layout::{delete_script, layout};

/// The paginated feed, newest posts first.
///
/// Edit and delete controls appear only on the viewer's own posts.
pub fn feed_page(feed: &FeedPage, viewer: Option<Snowflake>, error: Option<&str>) -> Markup {
    layout(
        "Feed",
        viewer.is_some(),
        html! {
            h1 { "Latest posts" }
            @if let Some(message) = error {
                p.error { (message) }
            }
            @if feed.posts.is_empty() && feed.page == 1 && error.is_none() {
                p { "No posts yet." }
            }
            ul.posts {
                @for post in &feed.posts {
                    li.post {
                        .post-meta {
                            span.author { (post.author_username) }
                            time datetime=(post.created_at.to_rfc3339()) {
                                (post.created_at.format("%Y-%m-%d %H:%M"))
                            }
                        }
                        p { (post.content) }
                        .post-actions {
                            a href={ "/post/" (post.id) } { "View" }
                            @if post.is_authored_by(viewer) {
                                a href={ "/edit-post/" (post.id) } { "Edit" }
                                button.delete data-post-id=(post.id) { "Delete" }
                            }
                        }
                    }
                }
            }
            nav.pager {
                @if let Some(prev) = feed.prev_page {
                    a href={ "/?page=" (prev) } { "Previous" }
                }
                @if let Some(next) = feed.next_page {
                    a href={ "/?page=" (next) } { "Next" }
                }
            }
            (delete_script())
        },
    )
}
