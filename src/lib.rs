// src/lib.rs
//! notionkit — a typed async client for the Notion API.
//!
//! The crate maps HTTP resources to typed request/response models, gives
//! builders for nested request payloads, and transparently handles
//! cursor-based pagination and rate limiting.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Client** — [`Client`], [`ClientConfig`]
//! - **Error handling** — [`Error`], [`ErrorCode`], [`ValidationError`]
//! - **Domain model** — [`model::Page`], [`model::Block`],
//!   [`model::Database`], etc.
//! - **Domain types** — [`types::PageId`], [`types::ApiKey`], etc.
//! - **Pagination** — [`api::PaginatedList`], [`api::collect_all`],
//!   [`api::stream_items`], [`api::stream_pages`]
//! - **Rate limiting** — [`api::RateLimiter`]
//!
//! # Example
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use notionkit::{Client, SearchRequest};
//!
//! # async fn run() -> Result<(), notionkit::Error> {
//! let client = Client::from_env()?;
//!
//! // Eager: collect everything (bounded by a page ceiling).
//! let results = client.search().query(SearchRequest::new().query("roadmap")).await?;
//!
//! // Lazy: stop after five results; no further pages are fetched.
//! let mut stream = Box::pin(client.search().stream(SearchRequest::new()));
//! let mut seen = 0;
//! while let Some(object) = stream.try_next().await? {
//!     println!("{:?}", object.title());
//!     seen += 1;
//!     if seen == 5 {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod config;
mod constants;
mod error;
pub mod model;
pub mod types;

// --- Client ---
pub use crate::client::Client;
pub use crate::config::ClientConfig;

// --- Error Handling ---
pub use crate::error::{Error, ErrorCode, Result, ValidationError};

// --- Request Builders ---
pub use crate::api::{
    AppendChildrenRequest, CreateCommentRequest, CreateFileUploadRequest, CreatePageRequest,
    QueryRequest, SearchRequest, Sort, SortDirection, UpdatePageRequest,
};

// --- Pagination & Rate Limiting ---
pub use crate::api::{collect_all, stream_items, stream_pages, PaginatedList, RateLimiter};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BlockId, CommentId, DataSourceId, DatabaseId, FileUploadId, PageId, UserId,
};
