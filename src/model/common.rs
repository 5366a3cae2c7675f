// src/model/common.rs
//! Shared wire shapes: parents, icons, hosted files, select options.

use crate::types::{BlockId, DataSourceId, DatabaseId, PageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an object hangs in the workspace tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: DatabaseId },
    DataSourceId { data_source_id: DataSourceId },
    PageId { page_id: PageId },
    BlockId { block_id: BlockId },
    Workspace { workspace: bool },
}

impl Parent {
    pub fn page(page_id: PageId) -> Self {
        Parent::PageId { page_id }
    }

    pub fn database(database_id: DatabaseId) -> Self {
        Parent::DatabaseId { database_id }
    }

    pub fn data_source(data_source_id: DataSourceId) -> Self {
        Parent::DataSourceId { data_source_id }
    }
}

/// Page or database icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    External { external: ExternalFile },
    File { file: HostedFile },
}

/// A file hosted outside Notion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// A file hosted by Notion; the URL expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// File attachment on a block or cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { external: ExternalFile },
    File { file: HostedFile },
    FileUpload { file_upload: FileUploadRef },
}

/// Reference to a completed file upload, used when attaching uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUploadRef {
    pub id: String,
}

/// One option of a select, multi-select, or status property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A date or date range property value. Start and end are ISO-8601 dates
/// or datetimes; they are carried opaquely, exactly as the service sent
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// A bare `{ "id": ... }` object reference, as used in relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: String,
}

/// An intentionally empty payload object (`{}` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyObject {}
