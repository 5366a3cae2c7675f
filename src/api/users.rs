// src/api/users.rs
//! The Users API: workspace members and the integration's own bot user.

use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_get, ApiRequest, Transport};
use crate::constants::MAX_PAGES_BULK;
use crate::error::Result;
use crate::model::User;
use crate::types::UserId;
use futures::future::BoxFuture;
use futures::stream::Stream;
use std::sync::Arc;

/// Typed access to the `/users` endpoints.
pub struct UsersApi {
    transport: Arc<dyn Transport>,
}

impl UsersApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieves a user by ID.
    pub async fn retrieve(&self, id: &UserId) -> Result<User> {
        let response = self
            .transport
            .send(ApiRequest::get(format!("users/{}", id.to_hyphenated())))
            .await?;
        decode(response)
    }

    /// Retrieves the bot user the API key belongs to.
    pub async fn me(&self) -> Result<User> {
        let response = self.transport.send(ApiRequest::get("users/me")).await?;
        decode(response)
    }

    /// Eagerly lists every user in the workspace.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.list_with_limit(MAX_PAGES_BULK).await
    }

    /// Same as [`list`](Self::list) with a caller-chosen page ceiling.
    pub async fn list_with_limit(&self, max_pages: u32) -> Result<Vec<User>> {
        pagination::collect_all(self.fetcher(), max_pages).await
    }

    /// Streams users, fetching pages on demand.
    pub fn stream(&self) -> impl Stream<Item = Result<User>> {
        pagination::stream_items(self.fetcher())
    }

    /// Streams whole user pages with their cursor metadata.
    pub fn stream_pages(&self) -> impl Stream<Item = Result<PaginatedList<User>>> {
        pagination::stream_pages(self.fetcher())
    }

    fn fetcher(
        &self,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<User>>> {
        paginated_get(Arc::clone(&self.transport), "users".to_string(), Vec::new())
    }
}
