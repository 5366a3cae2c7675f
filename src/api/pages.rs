// src/api/pages.rs
//! The Pages API: retrieve, create, and update pages, and page property
//! items.

use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_get, ApiRequest, Transport};
use crate::constants::MAX_PAGES_CHILDREN;
use crate::error::Result;
use crate::model::{Icon, Page, Parent};
use crate::types::PageId;
use futures::stream::Stream;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Payload for creating a page.
///
/// Property values use the API's write shapes, passed as raw JSON; the
/// builder only assembles the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: serde_json::Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Value>,
}

impl CreatePageRequest {
    pub fn new(parent: Parent) -> Self {
        Self {
            parent,
            properties: serde_json::Map::new(),
            icon: None,
            cover: None,
            children: Vec::new(),
        }
    }

    /// Sets one property value by name.
    pub fn property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Shorthand for the title property.
    pub fn title(self, text: impl Into<String>) -> Self {
        self.property(
            "title",
            serde_json::json!({ "title": [{ "text": { "content": text.into() } }] }),
        )
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Initial content blocks, in the API's block write shape.
    pub fn children(mut self, children: Vec<Value>) -> Self {
        self.children = children;
        self
    }
}

/// Payload for updating page properties.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

impl UpdatePageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }
}

/// Typed access to the `/pages` endpoints.
pub struct PagesApi {
    transport: Arc<dyn Transport>,
}

impl PagesApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves a page by ID.
    pub async fn retrieve(&self, id: &PageId) -> Result<Page> {
        let response = self
            .transport
            .send(ApiRequest::get(format!("pages/{}", id.to_hyphenated())))
            .await?;
        decode(response)
    }

    /// Creates a page under the given parent.
    pub async fn create(&self, request: CreatePageRequest) -> Result<Page> {
        let body = serde_json::to_value(&request).expect("request serialization is infallible");
        let response = self
            .transport
            .send(ApiRequest::post("pages").with_body(body))
            .await?;
        decode(response)
    }

    /// Updates page properties, icon, cover, or archive state.
    pub async fn update(&self, id: &PageId, request: UpdatePageRequest) -> Result<Page> {
        let body = serde_json::to_value(&request).expect("request serialization is infallible");
        let response = self
            .transport
            .send(ApiRequest::patch(format!("pages/{}", id.to_hyphenated())).with_body(body))
            .await?;
        decode(response)
    }

    /// Moves a page to the trash. Sugar over [`update`](Self::update).
    pub async fn trash(&self, id: &PageId) -> Result<Page> {
        self.update(id, UpdatePageRequest::new().archived(true))
            .await
    }

    /// Retrieves every item of a paginated page property.
    ///
    /// Property items come back in the API's raw item shape; most
    /// properties fit one response, but title, rich-text, relation, and
    /// people properties paginate past 25 references.
    pub async fn retrieve_property(&self, id: &PageId, property_id: &str) -> Result<Vec<Value>> {
        pagination::collect_all(self.property_fetcher(id, property_id), MAX_PAGES_CHILDREN).await
    }

    /// Streams items of a paginated page property.
    pub fn stream_property(
        &self,
        id: &PageId,
        property_id: &str,
    ) -> impl Stream<Item = Result<Value>> {
        pagination::stream_items(self.property_fetcher(id, property_id))
    }

    fn property_fetcher(
        &self,
        id: &PageId,
        property_id: &str,
    ) -> impl FnMut(
        Option<String>,
    ) -> futures::future::BoxFuture<'static, Result<PaginatedList<Value>>> {
        paginated_get(
            Arc::clone(&self.transport),
            format!("pages/{}/properties/{}", id.to_hyphenated(), property_id),
            Vec::new(),
        )
    }
}
