// src/api/blocks.rs
//! The Blocks API: retrieve/update/delete blocks and walk block children.

use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_get, ApiRequest, Transport};
use crate::constants::MAX_PAGES_CHILDREN;
use crate::error::Result;
use crate::model::Block;
use crate::types::BlockId;
use futures::future::BoxFuture;
use futures::stream::Stream;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Payload for appending children to a block or page.
#[derive(Debug, Clone, Serialize)]
pub struct AppendChildrenRequest {
    /// New blocks in the API's block write shape.
    pub children: Vec<Value>,
    /// Insert after this existing child instead of at the end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<BlockId>,
}

impl AppendChildrenRequest {
    pub fn new(children: Vec<Value>) -> Self {
        Self {
            children,
            after: None,
        }
    }

    pub fn after(mut self, block: BlockId) -> Self {
        self.after = Some(block);
        self
    }
}

/// Typed access to the `/blocks` endpoints.
pub struct BlocksApi {
    transport: Arc<dyn Transport>,
}

impl BlocksApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves a block by ID.
    pub async fn retrieve(&self, id: &BlockId) -> Result<Block> {
        let response = self
            .transport
            .send(ApiRequest::get(format!("blocks/{}", id.to_hyphenated())))
            .await?;
        decode(response)
    }

    /// Updates a block's type-specific payload or archive state. The body
    /// uses the API's block write shape.
    pub async fn update(&self, id: &BlockId, body: Value) -> Result<Block> {
        let response = self
            .transport
            .send(ApiRequest::patch(format!("blocks/{}", id.to_hyphenated())).with_body(body))
            .await?;
        decode(response)
    }

    /// Moves a block to the trash.
    pub async fn delete(&self, id: &BlockId) -> Result<Block> {
        let response = self
            .transport
            .send(ApiRequest::delete(format!("blocks/{}", id.to_hyphenated())))
            .await?;
        decode(response)
    }

    /// Child-block operations for the given parent.
    pub fn children(&self) -> BlockChildrenApi {
        BlockChildrenApi {
            transport: Arc::clone(&self.transport),
        }
    }
}

/// Typed access to `/blocks/{id}/children`.
pub struct BlockChildrenApi {
    transport: Arc<dyn Transport>,
}

impl BlockChildrenApi {
    /// Eagerly lists every child of `parent`, walking all pages.
    pub async fn list(&self, parent: &BlockId) -> Result<Vec<Block>> {
        self.list_with_limit(parent, MAX_PAGES_CHILDREN).await
    }

    /// Same as [`list`](Self::list) with a caller-chosen page ceiling.
    pub async fn list_with_limit(&self, parent: &BlockId, max_pages: u32) -> Result<Vec<Block>> {
        pagination::collect_all(self.fetcher(parent), max_pages).await
    }

    /// Streams children one block at a time, fetching pages on demand.
    pub fn stream(&self, parent: &BlockId) -> impl Stream<Item = Result<Block>> {
        pagination::stream_items(self.fetcher(parent))
    }

    /// Streams whole child pages with their cursor metadata.
    pub fn stream_pages(
        &self,
        parent: &BlockId,
    ) -> impl Stream<Item = Result<PaginatedList<Block>>> {
        pagination::stream_pages(self.fetcher(parent))
    }

    /// Appends blocks to `parent` and returns the created children.
    pub async fn append(
        &self,
        parent: &BlockId,
        request: AppendChildrenRequest,
    ) -> Result<Vec<Block>> {
        let body = serde_json::to_value(&request).expect("request serialization is infallible");
        let response = self
            .transport
            .send(
                ApiRequest::patch(format!("blocks/{}/children", parent.to_hyphenated()))
                    .with_body(body),
            )
            .await?;
        let page: PaginatedList<Block> = decode(response)?;
        Ok(page.results)
    }

    fn fetcher(
        &self,
        parent: &BlockId,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<Block>>> {
        paginated_get(
            Arc::clone(&self.transport),
            format!("blocks/{}/children", parent.to_hyphenated()),
            Vec::new(),
        )
    }
}
