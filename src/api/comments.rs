// src/api/comments.rs
//! The Comments API: create comments and list discussion threads.

use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_get, ApiRequest, Transport};
use crate::constants::MAX_PAGES_CHILDREN;
use crate::error::Result;
use crate::model::{Comment, Parent, RichText};
use crate::types::{BlockId, PageId};
use futures::future::BoxFuture;
use futures::stream::Stream;
use serde::Serialize;
use std::sync::Arc;

/// Payload for creating a comment: either a new thread on a page, or a
/// reply to an existing discussion.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_id: Option<String>,
    pub rich_text: Vec<RichText>,
}

impl CreateCommentRequest {
    /// Starts a new comment thread on a page.
    pub fn on_page(page_id: PageId, text: impl Into<String>) -> Self {
        Self {
            parent: Some(Parent::page(page_id)),
            discussion_id: None,
            rich_text: vec![RichText::text(text)],
        }
    }

    /// Replies to an existing discussion thread.
    pub fn in_discussion(discussion_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            parent: None,
            discussion_id: Some(discussion_id.into()),
            rich_text: vec![RichText::text(text)],
        }
    }

    /// Replaces the plain-text body with custom rich text spans.
    pub fn rich_text(mut self, rich_text: Vec<RichText>) -> Self {
        self.rich_text = rich_text;
        self
    }
}

/// Typed access to the `/comments` endpoints.
pub struct CommentsApi {
    transport: Arc<dyn Transport>,
}

impl CommentsApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Creates a comment.
    pub async fn create(&self, request: CreateCommentRequest) -> Result<Comment> {
        let body = serde_json::to_value(&request).expect("request serialization is infallible");
        let response = self
            .transport
            .send(ApiRequest::post("comments").with_body(body))
            .await?;
        decode(response)
    }

    /// Eagerly lists every open comment on a block or page.
    pub async fn list(&self, block_id: &BlockId) -> Result<Vec<Comment>> {
        self.list_with_limit(block_id, MAX_PAGES_CHILDREN).await
    }

    /// Same as [`list`](Self::list) with a caller-chosen page ceiling.
    pub async fn list_with_limit(&self, block_id: &BlockId, max_pages: u32) -> Result<Vec<Comment>> {
        pagination::collect_all(self.fetcher(block_id), max_pages).await
    }

    /// Streams comments, fetching pages on demand.
    pub fn stream(&self, block_id: &BlockId) -> impl Stream<Item = Result<Comment>> {
        pagination::stream_items(self.fetcher(block_id))
    }

    fn fetcher(
        &self,
        block_id: &BlockId,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<Comment>>> {
        paginated_get(
            Arc::clone(&self.transport),
            "comments".to_string(),
            vec![("block_id".to_string(), block_id.to_hyphenated())],
        )
    }
}
