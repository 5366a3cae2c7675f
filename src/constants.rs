// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how the client operates: how fast it is allowed to call the API, how
//! many results it asks for per round-trip, and where it stops a
//! pagination walk that refuses to end.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips when walking paginated endpoints.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// The Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Base URL of the Notion REST API.
pub const API_BASE_URL: &str = "https://api.notion.com/v1";

// ---------------------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------------------

/// Requests admitted per rate-limit window.
///
/// Notion documents an average of 3 requests per second for integrations;
/// the limiter enforces exactly that as a fixed window.
pub const RATE_LIMIT_MAX_REQUESTS: u32 = 3;

/// Duration of one rate-limit accounting window.
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// Pagination ceilings
// ---------------------------------------------------------------------------

/// Page ceiling for bulk listing endpoints (search, database/data-source
/// queries, user listing).
///
/// At 100 results per page this allows 50,000 results before the eager
/// collector refuses to keep walking the cursor chain. Result sets larger
/// than that should use the streaming modes.
pub const MAX_PAGES_BULK: u32 = 500;

/// Page ceiling for child-enumeration endpoints (block children, comments,
/// page property items).
///
/// Children of a single object are small result sets; a cursor chain
/// longer than this almost certainly indicates a service-side bug.
pub const MAX_PAGES_CHILDREN: u32 = 50;

// ---------------------------------------------------------------------------
// Transport timeouts
// ---------------------------------------------------------------------------

/// TCP connect timeout for API requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// End-to-end timeout for a single API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
