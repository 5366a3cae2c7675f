// src/types/mod.rs
//! Domain newtypes shared across the client: strongly-typed IDs and the
//! validated API key.

mod api_key;
mod ids;

pub use api_key::ApiKey;
pub use ids::{
    BlockId, BlockMarker, CommentId, CommentMarker, DataSourceId, DataSourceMarker, DatabaseId,
    DatabaseMarker, FileUploadId, FileUploadMarker, Id, PageId, PageMarker, UserId, UserMarker,
};
