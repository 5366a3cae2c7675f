// src/model/file_upload.rs
//! File uploads — staged files that can be attached to blocks and pages.

use crate::types::FileUploadId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file upload object as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object: String,
    pub id: FileUploadId,
    pub created_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
    pub status: FileUploadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,
    /// Upload mode the file was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FileUploadMode>,
    /// Part bookkeeping for multi-part uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_parts: Option<PartProgress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileUploadStatus {
    Pending,
    Uploaded,
    Expired,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileUploadMode {
    SinglePart,
    MultiPart,
    ExternalUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartProgress {
    pub total: u32,
    pub sent: u32,
}
