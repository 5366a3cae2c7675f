// src/api/search.rs
//! The Search API: full-text search across everything shared with the
//! integration.

use super::pagination::{self, PaginatedList};
use super::transport::{paginated_post, Transport};
use crate::constants::MAX_PAGES_BULK;
use crate::error::Result;
use crate::model::Object;
use futures::future::BoxFuture;
use futures::stream::Stream;
use serde::Serialize;
use std::sync::Arc;

/// Restricts search results to one object type.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    /// `"page"`, `"database"`, or `"data_source"`.
    pub value: String,
    /// Always `"object"`.
    pub property: String,
}

/// Sort for search results; only `last_edited_time` is supported by the
/// API.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSort {
    pub direction: String,
    pub timestamp: String,
}

/// Search payload with chainable construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches page and database titles against `query`.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restricts results to pages.
    pub fn pages_only(mut self) -> Self {
        self.filter = Some(SearchFilter {
            value: "page".to_string(),
            property: "object".to_string(),
        });
        self
    }

    /// Restricts results to databases.
    pub fn databases_only(mut self) -> Self {
        self.filter = Some(SearchFilter {
            value: "database".to_string(),
            property: "object".to_string(),
        });
        self
    }

    /// Sorts by last edited time, newest first.
    pub fn newest_first(mut self) -> Self {
        self.sort = Some(SearchSort {
            direction: "descending".to_string(),
            timestamp: "last_edited_time".to_string(),
        });
        self
    }

    fn into_body(self) -> serde_json::Value {
        serde_json::to_value(&self).expect("request serialization is infallible")
    }
}

/// Typed access to the `/search` endpoint.
pub struct SearchApi {
    transport: Arc<dyn Transport>,
}

impl SearchApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Eagerly collects every search result.
    pub async fn query(&self, request: SearchRequest) -> Result<Vec<Object>> {
        self.query_with_limit(request, MAX_PAGES_BULK).await
    }

    /// Same as [`query`](Self::query) with a caller-chosen page ceiling.
    pub async fn query_with_limit(
        &self,
        request: SearchRequest,
        max_pages: u32,
    ) -> Result<Vec<Object>> {
        pagination::collect_all(self.fetcher(request), max_pages).await
    }

    /// Streams search results, fetching pages on demand.
    pub fn stream(&self, request: SearchRequest) -> impl Stream<Item = Result<Object>> {
        pagination::stream_items(self.fetcher(request))
    }

    /// Streams whole result pages with their cursor metadata.
    pub fn stream_result_pages(
        &self,
        request: SearchRequest,
    ) -> impl Stream<Item = Result<PaginatedList<Object>>> {
        pagination::stream_pages(self.fetcher(request))
    }

    fn fetcher(
        &self,
        request: SearchRequest,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<Object>>> {
        paginated_post(
            Arc::clone(&self.transport),
            "search".to_string(),
            request.into_body(),
        )
    }
}
