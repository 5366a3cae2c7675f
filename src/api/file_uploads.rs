// src/api/file_uploads.rs
//! The File Uploads API: stage files for attachment to blocks and pages.
//!
//! Single-part flow: `create` then one `send_part`. Multi-part flow:
//! `create` with a part count, `send_part` for each part in order, then
//! `complete`. Parts are sent sequentially; every send still passes
//! through the client's rate limiter.

use super::pagination::{self, PaginatedList};
use super::transport::{decode, paginated_get, ApiRequest, Transport, UploadRequest};
use crate::constants::MAX_PAGES_BULK;
use crate::error::Result;
use crate::model::{FileUpload, FileUploadMode};
use crate::types::FileUploadId;
use futures::future::BoxFuture;
use futures::stream::Stream;
use serde::Serialize;
use std::sync::Arc;

/// Payload for creating a file upload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFileUploadRequest {
    pub mode: FileUploadMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_parts: Option<u32>,
    /// For `external_url` mode: the URL to import from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl CreateFileUploadRequest {
    /// A single-part upload for a file that fits one request.
    pub fn single_part(filename: impl Into<String>) -> Self {
        Self {
            mode: FileUploadMode::SinglePart,
            filename: Some(filename.into()),
            content_type: None,
            number_of_parts: None,
            external_url: None,
        }
    }

    /// A multi-part upload split into `number_of_parts` pieces.
    pub fn multi_part(filename: impl Into<String>, number_of_parts: u32) -> Self {
        Self {
            mode: FileUploadMode::MultiPart,
            filename: Some(filename.into()),
            content_type: None,
            number_of_parts: Some(number_of_parts),
            external_url: None,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Typed access to the `/file_uploads` endpoints.
pub struct FileUploadsApi {
    transport: Arc<dyn Transport>,
}

impl FileUploadsApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Creates a file upload and returns its pending record.
    pub async fn create(&self, request: CreateFileUploadRequest) -> Result<FileUpload> {
        let body = serde_json::to_value(&request).expect("request serialization is infallible");
        let response = self
            .transport
            .send(ApiRequest::post("file_uploads").with_body(body))
            .await?;
        decode(response)
    }

    /// Retrieves an upload's current status.
    pub async fn retrieve(&self, id: &FileUploadId) -> Result<FileUpload> {
        let response = self
            .transport
            .send(ApiRequest::get(format!(
                "file_uploads/{}",
                id.to_hyphenated()
            )))
            .await?;
        decode(response)
    }

    /// Sends file content for a single-part upload.
    pub async fn send(
        &self,
        id: &FileUploadId,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<FileUpload> {
        self.send_part_inner(id, file_name.into(), data, None).await
    }

    /// Sends one part of a multi-part upload. Part numbers start at 1 and
    /// must arrive in order.
    pub async fn send_part(
        &self,
        id: &FileUploadId,
        file_name: impl Into<String>,
        data: Vec<u8>,
        part_number: u32,
    ) -> Result<FileUpload> {
        self.send_part_inner(id, file_name.into(), data, Some(part_number))
            .await
    }

    async fn send_part_inner(
        &self,
        id: &FileUploadId,
        file_name: String,
        data: Vec<u8>,
        part_number: Option<u32>,
    ) -> Result<FileUpload> {
        let response = self
            .transport
            .send_upload(UploadRequest {
                path: format!("file_uploads/{}/send", id.to_hyphenated()),
                file_name,
                data,
                part_number,
            })
            .await?;
        decode(response)
    }

    /// Finalizes a multi-part upload after every part has been sent.
    pub async fn complete(&self, id: &FileUploadId) -> Result<FileUpload> {
        let response = self
            .transport
            .send(ApiRequest::post(format!(
                "file_uploads/{}/complete",
                id.to_hyphenated()
            )))
            .await?;
        decode(response)
    }

    /// Eagerly lists the workspace's file uploads.
    pub async fn list(&self) -> Result<Vec<FileUpload>> {
        pagination::collect_all(self.fetcher(), MAX_PAGES_BULK).await
    }

    /// Streams file uploads, fetching pages on demand.
    pub fn stream(&self) -> impl Stream<Item = Result<FileUpload>> {
        pagination::stream_items(self.fetcher())
    }

    fn fetcher(
        &self,
    ) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<FileUpload>>> {
        paginated_get(
            Arc::clone(&self.transport),
            "file_uploads".to_string(),
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multi_part_request_carries_a_part_count() {
        let body = serde_json::to_value(
            CreateFileUploadRequest::multi_part("video.mp4", 4).content_type("video/mp4"),
        )
        .unwrap();

        assert_eq!(body["mode"], "multi_part");
        assert_eq!(body["number_of_parts"], 4);
        assert_eq!(body["content_type"], "video/mp4");
    }

    #[test]
    fn single_part_request_omits_part_bookkeeping() {
        let body =
            serde_json::to_value(CreateFileUploadRequest::single_part("notes.txt")).unwrap();
        assert_eq!(body["mode"], "single_part");
        assert!(body.get("number_of_parts").is_none());
    }
}
