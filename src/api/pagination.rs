// src/api/pagination.rs
//! Cursor-based pagination over any "fetch one page" operation.
//!
//! Every listing endpoint hands this module a closure that fetches a single
//! page given an optional cursor; the engine walks the cursor chain in one
//! of three modes:
//!
//! - [`collect_all`] — eager: buffer every page into one `Vec`, guarded by
//!   a page ceiling against runaway cursor chains.
//! - [`stream_items`] — lazy: yield items as their page arrives, fetching
//!   no page the consumer has not demanded.
//! - [`stream_pages`] — lazy: same demand-driven contract, but yields whole
//!   pages with their cursor metadata.
//!
//! Cursors are opaque: the engine echoes `next_cursor` back verbatim and
//! never inspects it. A response claiming `has_more` without a cursor is a
//! contract violation by the service and fails the walk immediately —
//! re-fetching with an absent cursor would restart from page one and loop
//! forever.

use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// One page of results from a paginated endpoint.
///
/// Mirrors the Notion list envelope: `results` in page order plus the
/// cursor handshake. `has_more == false` implies the chain is complete and
/// `next_cursor` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Always `"list"` on the wire.
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> PaginatedList<T> {
    /// A single complete page, as returned by endpoints whose result set
    /// fits in one response.
    pub fn complete(results: Vec<T>) -> Self {
        Self {
            object: "list".to_string(),
            results,
            next_cursor: None,
            has_more: false,
        }
    }
}

/// Where the walk stands between two fetches.
enum Cursor {
    Start,
    Next(String),
    Finished,
}

impl Cursor {
    /// The cursor to send for the page after `page`, or an error if the
    /// service claims more results without telling us where they are.
    fn after<T>(page: &PaginatedList<T>) -> Result<Self> {
        if !page.has_more {
            return Ok(Cursor::Finished);
        }
        match &page.next_cursor {
            Some(cursor) => Ok(Cursor::Next(cursor.clone())),
            None => Err(Error::MalformedPaginationResponse),
        }
    }
}

/// Fetched pages and the safety counters for one eager walk. Local to a
/// single `collect_all` call; discarded when it returns.
struct CollectRun<T> {
    items: Vec<T>,
    pages_fetched: u32,
}

/// Eagerly collects every item behind a paginated endpoint.
///
/// Fetches pages sequentially starting with an absent cursor and
/// accumulates `results` in page order. Stops when the service reports
/// `has_more == false`. If `max_pages` pages have been fetched and the
/// service still reports more, fails with
/// [`Error::PaginationLimitExceeded`] — a safety valve against malformed
/// or infinite cursor chains, not a normal termination path. On any error
/// the partial accumulation is discarded: eager collection is
/// all-or-nothing.
pub async fn collect_all<T, F, Fut>(mut fetch_page: F, max_pages: u32) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PaginatedList<T>>>,
{
    if max_pages == 0 {
        return Err(Error::PaginationLimitExceeded {
            pages_fetched: 0,
            max_pages: 0,
        });
    }

    let mut run = CollectRun {
        items: Vec::new(),
        pages_fetched: 0,
    };
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor.take()).await?;
        let next = Cursor::after(&page)?;
        run.pages_fetched += 1;
        run.items.extend(page.results);

        match next {
            Cursor::Finished => return Ok(run.items),
            Cursor::Next(next) => {
                if run.pages_fetched >= max_pages {
                    log::warn!(
                        "pagination ceiling hit after {} pages (max_pages = {})",
                        run.pages_fetched,
                        max_pages
                    );
                    return Err(Error::PaginationLimitExceeded {
                        pages_fetched: run.pages_fetched,
                        max_pages,
                    });
                }
                cursor = Some(next);
            }
            Cursor::Start => unreachable!("Cursor::after never returns Start"),
        }
    }
}

/// Lazily walks a paginated endpoint, yielding one whole page per poll.
///
/// Demand-driven: page N+1 is fetched only when the consumer polls past
/// page N. Dropping the stream stops all further fetches. The stream is
/// finite and not restartable — each page is fetched exactly once.
pub fn stream_pages<T, F, Fut>(fetch_page: F) -> impl Stream<Item = Result<PaginatedList<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PaginatedList<T>>>,
{
    stream::try_unfold(
        (fetch_page, Cursor::Start),
        |(mut fetch_page, cursor)| async move {
            let request_cursor = match cursor {
                Cursor::Start => None,
                Cursor::Next(cursor) => Some(cursor),
                Cursor::Finished => return Ok(None),
            };
            let page = fetch_page(request_cursor).await?;
            let next = Cursor::after(&page)?;
            Ok(Some((page, (fetch_page, next))))
        },
    )
}

/// Lazily walks a paginated endpoint, yielding individual items.
///
/// Items surface as soon as their containing page is fetched; the full
/// result set is never buffered. Consumers may stop early (`take`,
/// breaking out of a loop) and no page beyond the demanded ones is
/// requested.
pub fn stream_items<T, F, Fut>(fetch_page: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PaginatedList<T>>>,
{
    stream_pages(fetch_page)
        .map_ok(|page| stream::iter(page.results.into_iter().map(Ok)))
        .try_flatten()
}
