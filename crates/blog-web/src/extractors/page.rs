//! Feed page-number extractor
//!
//! Extracts the `page` query parameter. The feed treats anything that is
//! not a positive integer as page 1, so this extractor never rejects.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Raw feed query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Requested page, as it appeared in the URL
    #[serde(default)]
    pub page: Option<String>,
}

/// Validated feed page number (1-based)
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl From<PageParams> for PageQuery {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1);

        Self { page }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(PageQuery::from(params))
    }
}
