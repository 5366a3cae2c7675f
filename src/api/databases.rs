// src/api/databases.rs
//! The Databases API: schema retrieval and row queries.

use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_post, ApiRequest, Transport};
use crate::constants::MAX_PAGES_BULK;
use crate::error::Result;
use crate::model::{Database, Page, Parent};
use crate::types::DatabaseId;
use futures::future::BoxFuture;
use futures::stream::Stream;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Sort direction for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One sort instruction: by property or by timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Sort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub direction: SortDirection,
}

impl Sort {
    pub fn by_property(name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: Some(name.into()),
            timestamp: None,
            direction,
        }
    }

    /// Sorts by `created_time` or `last_edited_time`.
    pub fn by_timestamp(timestamp: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: None,
            timestamp: Some(timestamp.into()),
            direction,
        }
    }
}

/// Query payload for database and data-source row queries.
///
/// Filters are deeply polymorphic on the wire, so they are accepted as raw
/// JSON in the API's filter shape; sorts get a typed builder.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size.min(crate::constants::NOTION_API_PAGE_SIZE));
        self
    }

    pub(crate) fn into_body(self) -> Value {
        serde_json::to_value(&self).expect("request serialization is infallible")
    }
}

/// Typed access to the `/databases` endpoints.
pub struct DatabasesApi {
    transport: Arc<dyn Transport>,
}

impl DatabasesApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves a database and its schema by ID.
    pub async fn retrieve(&self, id: &DatabaseId) -> Result<Database> {
        let response = self
            .transport
            .send(ApiRequest::get(format!("databases/{}", id.to_hyphenated())))
            .await?;
        decode(response)
    }

    /// Creates a database under a page parent. `properties` uses the API's
    /// schema write shape.
    pub async fn create(
        &self,
        parent: Parent,
        title: Vec<crate::model::RichText>,
        properties: Value,
    ) -> Result<Database> {
        let body = serde_json::json!({
            "parent": parent,
            "title": title,
            "properties": properties,
        });
        let response = self
            .transport
            .send(ApiRequest::post("databases").with_body(body))
            .await?;
        decode(response)
    }

    /// Updates a database's title, description, or schema.
    pub async fn update(&self, id: &DatabaseId, body: Value) -> Result<Database> {
        let response = self
            .transport
            .send(ApiRequest::patch(format!("databases/{}", id.to_hyphenated())).with_body(body))
            .await?;
        decode(response)
    }

    /// Eagerly queries every matching row.
    pub async fn query(&self, id: &DatabaseId, request: QueryRequest) -> Result<Vec<Page>> {
        self.query_with_limit(id, request, MAX_PAGES_BULK).await
    }

    /// Same as [`query`](Self::query) with a caller-chosen page ceiling.
    pub async fn query_with_limit(
        &self,
        id: &DatabaseId,
        request: QueryRequest,
        max_pages: u32,
    ) -> Result<Vec<Page>> {
        pagination::collect_all(self.fetcher(id, request), max_pages).await
    }

    /// Streams matching rows one page fetch at a time.
    pub fn stream_query(
        &self,
        id: &DatabaseId,
        request: QueryRequest,
    ) -> impl Stream<Item = Result<Page>> {
        pagination::stream_items(self.fetcher(id, request))
    }

    /// Streams whole result pages with their cursor metadata.
    pub fn stream_query_pages(
        &self,
        id: &DatabaseId,
        request: QueryRequest,
    ) -> impl Stream<Item = Result<PaginatedList<Page>>> {
        pagination::stream_pages(self.fetcher(id, request))
    }

    fn fetcher(
        &self,
        id: &DatabaseId,
        request: QueryRequest,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<Page>>> {
        paginated_post(
            Arc::clone(&self.transport),
            format!("databases/{}/query", id.to_hyphenated()),
            request.into_body(),
        )
    }
}
