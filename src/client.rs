// src/client.rs
//! The client facade: one owned transport (with its rate limiter) and an
//! accessor per resource group.

use crate::api::{
    BlocksApi, CommentsApi, DataSourcesApi, DatabasesApi, FileUploadsApi, HttpTransport, PagesApi,
    SearchApi, Transport, UsersApi,
};
use crate::config::ClientConfig;
use crate::error::Result;
use std::sync::Arc;

/// A Notion API client.
///
/// Cheap to clone; clones share the same transport and rate-limiter
/// state. Two separately-constructed clients get independent limiters —
/// there is no hidden global state.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Builds a client over HTTP with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Builds a client from the `NOTION_API_KEY` environment variable and
    /// default configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Builds a client over a custom transport. This is the seam tests
    /// and embedders use to substitute the network.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn pages(&self) -> PagesApi {
        PagesApi::new(Arc::clone(&self.transport))
    }

    pub fn blocks(&self) -> BlocksApi {
        BlocksApi::new(Arc::clone(&self.transport))
    }

    pub fn databases(&self) -> DatabasesApi {
        DatabasesApi::new(Arc::clone(&self.transport))
    }

    pub fn data_sources(&self) -> DataSourcesApi {
        DataSourcesApi::new(Arc::clone(&self.transport))
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(Arc::clone(&self.transport))
    }

    pub fn comments(&self) -> CommentsApi {
        CommentsApi::new(Arc::clone(&self.transport))
    }

    pub fn search(&self) -> SearchApi {
        SearchApi::new(Arc::clone(&self.transport))
    }

    pub fn file_uploads(&self) -> FileUploadsApi {
        FileUploadsApi::new(Arc::clone(&self.transport))
    }
}
