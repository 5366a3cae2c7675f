// src/api/data_sources.rs
//! The Data Sources API: the queryable tables behind multi-source
//! databases.

use super::databases::QueryRequest;
use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_post, ApiRequest, Transport};
use crate::constants::MAX_PAGES_BULK;
use crate::error::Result;
use crate::model::{DataSource, Page};
use crate::types::DataSourceId;
use futures::future::BoxFuture;
use futures::stream::Stream;
use std::sync::Arc;

/// Typed access to the `/data_sources` endpoints.
pub struct DataSourcesApi {
    transport: Arc<dyn Transport>,
}

impl DataSourcesApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves a data source and its schema by ID.
    pub async fn retrieve(&self, id: &DataSourceId) -> Result<DataSource> {
        let response = self
            .transport
            .send(ApiRequest::get(format!(
                "data_sources/{}",
                id.to_hyphenated()
            )))
            .await?;
        decode(response)
    }

    /// Eagerly queries every matching row of the data source.
    pub async fn query(&self, id: &DataSourceId, request: QueryRequest) -> Result<Vec<Page>> {
        self.query_with_limit(id, request, MAX_PAGES_BULK).await
    }

    /// Same as [`query`](Self::query) with a caller-chosen page ceiling.
    pub async fn query_with_limit(
        &self,
        id: &DataSourceId,
        request: QueryRequest,
        max_pages: u32,
    ) -> Result<Vec<Page>> {
        pagination::collect_all(self.fetcher(id, request), max_pages).await
    }

    /// Streams matching rows, fetching result pages on demand.
    pub fn stream_query(
        &self,
        id: &DataSourceId,
        request: QueryRequest,
    ) -> impl Stream<Item = Result<Page>> {
        pagination::stream_items(self.fetcher(id, request))
    }

    /// Streams whole result pages with their cursor metadata.
    pub fn stream_query_pages(
        &self,
        id: &DataSourceId,
        request: QueryRequest,
    ) -> impl Stream<Item = Result<PaginatedList<Page>>> {
        pagination::stream_pages(self.fetcher(id, request))
    }

    fn fetcher(
        &self,
        id: &DataSourceId,
        request: QueryRequest,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<Page>>> {
        paginated_post(
            Arc::clone(&self.transport),
            format!("data_sources/{}/query", id.to_hyphenated()),
            request.into_body(),
        )
    }
}
