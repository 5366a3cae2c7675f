// tests/common/mod.rs
//! Shared test doubles: a scripted transport that answers from canned
//! responses and records every request it sees.

use async_trait::async_trait;
use notionkit::api::transport::StatusCode;
use notionkit::api::{ApiRequest, ApiResponse, Transport, UploadRequest};
use notionkit::Result;
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn(&ApiRequest) -> ApiResponse + Send + Sync>;

pub struct MockTransport {
    pub requests: Mutex<Vec<ApiRequest>>,
    pub uploads: Mutex<Vec<UploadRequest>>,
    handler: Handler,
}

impl MockTransport {
    pub fn new(
        handler: impl Fn(&ApiRequest) -> ApiResponse + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            handler: Box::new(handler),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        Ok(response)
    }

    async fn send_upload(&self, request: UploadRequest) -> Result<ApiResponse> {
        self.uploads.lock().unwrap().push(request.clone());
        Ok(ok(
            r#"{
                "object": "file_upload",
                "id": "b52b8ed6-e029-4707-a671-832549c09de3",
                "created_time": "2025-03-15T20:53:00.000Z",
                "status": "pending",
                "mode": "multi_part"
            }"#,
        ))
    }
}

pub fn ok(body: &str) -> ApiResponse {
    with_status(200, body)
}

pub fn with_status(status: u16, body: &str) -> ApiResponse {
    ApiResponse {
        status: StatusCode::from_u16(status).unwrap(),
        url: "https://api.notion.com/v1/test".to_string(),
        body: body.to_string(),
    }
}

/// A minimal page body the models can parse.
pub fn page_json(id: &str, title: &str) -> String {
    format!(
        r#"{{
            "object": "page",
            "id": "{id}",
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-07-06T19:16:00.000Z",
            "archived": false,
            "parent": {{"type": "workspace", "workspace": true}},
            "properties": {{
                "Name": {{
                    "id": "title",
                    "type": "title",
                    "title": [{{"type": "text", "text": {{"content": "{title}"}}, "plain_text": "{title}"}}]
                }}
            }},
            "url": "https://www.notion.so/{id}"
        }}"#
    )
}

/// A user-list page body with the given names and cursor handshake.
pub fn user_list_json(names: &[&str], next_cursor: Option<&str>) -> String {
    let results: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"object": "user", "id": "00000000-0000-4000-8000-{i:012}", "name": "{name}"}}"#
            )
        })
        .collect();
    format!(
        r#"{{
            "object": "list",
            "results": [{}],
            "next_cursor": {},
            "has_more": {}
        }}"#,
        results.join(","),
        next_cursor
            .map(|c| format!("\"{c}\""))
            .unwrap_or_else(|| "null".to_string()),
        next_cursor.is_some(),
    )
}
