// src/api/transport.rs
//! HTTP transport for the Notion API.
//!
//! The rest of the crate depends on the [`Transport`] capability, never on
//! reqwest details. [`HttpTransport`] is the production implementation: a
//! thin reqwest wrapper that attaches authentication headers and routes
//! every request through the shared rate limiter before it touches the
//! network.

use super::pagination::PaginatedList;
use super::rate_limit::RateLimiter;
use crate::config::ClientConfig;
use crate::constants::{ERROR_BODY_PREVIEW_LENGTH, NOTION_API_PAGE_SIZE};
use crate::error::{Error, ErrorCode, Result};
use async_trait::async_trait;
use futures::future::BoxFuture;
use reqwest::{header, Client};
// Re-exported so embedders and scripted transports don't need a direct
// reqwest dependency.
pub use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// One API request, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path without a leading slash, e.g. `pages/{id}`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

/// The ability to exchange one request for one response.
///
/// This is the seam between the typed API surface and the network; tests
/// drive the whole client through a scripted implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a JSON request and returns the raw response body.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;

    /// Sends one file-upload part as a multipart form.
    async fn send_upload(&self, request: UploadRequest) -> Result<ApiResponse>;
}

/// A multipart file-part send, kept transport-agnostic so scripted
/// transports can record it.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Endpoint path, e.g. `file_uploads/{id}/send`.
    pub path: String,
    pub file_name: String,
    pub data: Vec<u8>,
    /// Part index for multi-part uploads, starting at 1.
    pub part_number: Option<u32>,
}

/// Decodes a response into a typed value or a typed API error.
///
/// Success bodies that fail to parse surface a `Deserialization` error
/// with a bounded body preview; error bodies are decoded into the typed
/// [`ErrorCode`] vocabulary with an HTTP-status fallback when the error
/// envelope itself is unparseable.
pub(crate) fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T> {
    if response.status.is_success() {
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("failed to parse response from {}: {}", response.url, e);
            Error::Deserialization {
                source: e,
                body: preview(&response.body),
            }
        })
    } else {
        Err(decode_error(response))
    }
}

/// Error envelope returned by the Notion API.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: String,
    message: String,
    request_id: Option<String>,
}

fn decode_error(response: ApiResponse) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => Error::Api {
            code: ErrorCode::from_api_response(&envelope.code),
            message: envelope.message,
            status: response.status,
            request_id: envelope.request_id,
        },
        Err(_) => Error::Api {
            code: ErrorCode::from_http_status(response.status.as_u16()),
            message: format!("HTTP {} from {}", response.status, response.url),
            status: response.status,
            request_id: None,
        },
    }
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        let mut end = ERROR_BODY_PREVIEW_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

/// Production transport: reqwest with default headers plus the shared
/// fixed-window rate limiter.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    limiter: RateLimiter,
}

impl HttpTransport {
    /// Builds the HTTP client with Notion authentication headers and the
    /// limiter state this transport will share across all callers.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&config)?)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        let limiter = RateLimiter::new(config.max_requests_per_window, config.window_duration)
            .with_wait_timeout(config.rate_limit_wait_timeout);

        Ok(Self {
            client,
            base_url: config.base_url,
            limiter,
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", config.api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                Error::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(&config.notion_version).map_err(|e| {
                Error::MissingConfiguration(format!("Invalid Notion-Version value: {}", e))
            })?,
        );

        Ok(headers)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        log::debug!("{} {}", request.method, url);

        self.limiter
            .run_gated(|| async {
                let mut builder = self.client.request(request.method.clone(), url.clone());
                if !request.query.is_empty() {
                    builder = builder.query(&request.query);
                }
                if let Some(body) = &request.body {
                    builder = builder.json(body);
                }

                let response = builder.send().await?;
                let status = response.status();
                let url = response.url().to_string();
                let body = response.text().await?;
                log::debug!("{} -> {}", url, status);

                Ok(ApiResponse { status, url, body })
            })
            .await
    }

    async fn send_upload(&self, request: UploadRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        log::debug!("POST {} (multipart, {} bytes)", url, request.data.len());

        self.limiter
            .run_gated(|| async {
                let part =
                    reqwest::multipart::Part::bytes(request.data.clone()).file_name(request.file_name.clone());
                let mut form = reqwest::multipart::Form::new().part("file", part);
                if let Some(part_number) = request.part_number {
                    form = form.text("part_number", part_number.to_string());
                }

                let response = self.client.post(url.clone()).multipart(form).send().await?;
                let status = response.status();
                let url = response.url().to_string();
                let body = response.text().await?;

                Ok(ApiResponse { status, url, body })
            })
            .await
    }
}

/// Builds a page-fetch closure for a GET listing endpoint, paginated via
/// `start_cursor`/`page_size` query parameters.
pub(crate) fn paginated_get<T>(
    transport: Arc<dyn Transport>,
    path: String,
    query: Vec<(String, String)>,
) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<T>>>
where
    T: DeserializeOwned + Send + 'static,
{
    move |cursor| {
        let transport = Arc::clone(&transport);
        let path = path.clone();
        let mut query = query.clone();
        Box::pin(async move {
            query.push(("page_size".to_string(), NOTION_API_PAGE_SIZE.to_string()));
            if let Some(cursor) = cursor {
                query.push(("start_cursor".to_string(), cursor));
            }
            let response = transport
                .send(ApiRequest::get(path).with_query(query))
                .await?;
            decode(response)
        })
    }
}

/// Builds a page-fetch closure for a POST listing endpoint, paginated via
/// `start_cursor`/`page_size` body fields merged into `base_body`.
pub(crate) fn paginated_post<T>(
    transport: Arc<dyn Transport>,
    path: String,
    base_body: Value,
) -> impl FnMut(Option<String>) -> BoxFuture<'static, Result<PaginatedList<T>>>
where
    T: DeserializeOwned + Send + 'static,
{
    move |cursor| {
        let transport = Arc::clone(&transport);
        let path = path.clone();
        let mut body = base_body.clone();
        Box::pin(async move {
            if body.get("page_size").is_none() {
                body["page_size"] = Value::from(NOTION_API_PAGE_SIZE);
            }
            if let Some(cursor) = cursor {
                body["start_cursor"] = Value::from(cursor);
            }
            let response = transport
                .send(ApiRequest::post(path).with_body(body))
                .await?;
            decode(response)
        })
    }
}
