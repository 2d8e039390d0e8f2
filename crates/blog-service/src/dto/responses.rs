//! View models handed to the template layer
//!
//! The feed page carries its own pagination links so templates never redo
//! the arithmetic. Delete and health are the only JSON responses in the app.

use blog_core::entities::FeedItem;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fixed number of posts per feed page
pub const PAGE_SIZE: i64 = 10;

/// One page of the post feed
#[derive(Debug, Clone)]
pub struct FeedPage {
    /// Posts on this page, newest first
    pub posts: Vec<FeedItem>,
    /// The page that was rendered (1-based)
    pub page: i64,
    /// Previous page number, absent on the first page
    pub prev_page: Option<i64>,
    /// Next page number, absent when no posts lie past this page
    pub next_page: Option<i64>,
}

impl FeedPage {
    /// Assemble a page from the fetched posts and the total post count.
    ///
    /// A page past the end keeps its `prev_page` link even though the post
    /// list is empty, so the reader can walk back into range.
    #[must_use]
    pub fn new(posts: Vec<FeedItem>, page: i64, total: i64) -> Self {
        let offset = (page - 1) * PAGE_SIZE;
        let prev_page = (page > 1).then_some(page - 1);
        let next_page = (total > offset + PAGE_SIZE).then_some(page + 1);

        Self {
            posts,
            page,
            prev_page,
            next_page,
        }
    }

    /// Offset into the feed for a 1-based page number
    #[must_use]
    pub fn offset_for(page: i64) -> i64 {
        (page - 1) * PAGE_SIZE
    }
}

/// JSON payload for a successful post deletion
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

impl DeleteResponse {
    /// The payload the delete endpoint returns on success
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            message: "Post deleted successfully",
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub sessions: String,
}

impl HealthResponse {
    pub fn report(database_up: bool, sessions_up: bool) -> Self {
        fn verdict(up: bool) -> String {
            let word = if up { "healthy" } else { "unhealthy" };
            word.to_string()
        }

        Self {
            status: if database_up && sessions_up { "healthy" } else { "degraded" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: verdict(database_up),
                sessions: verdict(sessions_up),
            },
        }
    }
}
