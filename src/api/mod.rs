// src/api/mod.rs
//! Notion API interaction — transport, rate limiting, pagination, and the
//! typed endpoint groups.
//!
//! Control flow through this module is always the same: an endpoint
//! method builds a request, the transport routes it through the shared
//! [`RateLimiter`](rate_limit::RateLimiter), and listing endpoints hand a
//! page-fetch closure to the [`pagination`] engine, which walks the
//! cursor chain in whichever consumption mode the caller picked.

mod blocks;
mod comments;
mod data_sources;
mod databases;
mod file_uploads;
mod pages;
pub mod pagination;
pub mod rate_limit;
mod search;
pub mod transport;
mod users;

pub use blocks::{AppendChildrenRequest, BlockChildrenApi, BlocksApi};
pub use comments::{CommentsApi, CreateCommentRequest};
pub use data_sources::DataSourcesApi;
pub use databases::{DatabasesApi, QueryRequest, Sort, SortDirection};
pub use file_uploads::{CreateFileUploadRequest, FileUploadsApi};
pub use pages::{CreatePageRequest, PagesApi, UpdatePageRequest};
pub use pagination::{collect_all, stream_items, stream_pages, PaginatedList};
pub use rate_limit::RateLimiter;
pub use search::{SearchApi, SearchFilter, SearchRequest, SearchSort};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport, UploadRequest};
pub use users::UsersApi;
