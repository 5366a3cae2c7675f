// src/api/rate_limit.rs
//! Fixed-window rate limiting for outbound API calls.
//!
//! Every request the client sends crosses this gate. The limiter admits at
//! most `max_requests` calls per window; excess callers suspend until the
//! window rolls over and are released in arrival order. The wrapped
//! operation always runs outside the admission lock, so a slow request
//! never blocks other callers' admission checks.

use crate::error::Error;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Shared accounting for the current window.
///
/// Invariant: `admitted <= max_requests` whenever `now - window_start` is
/// within the window duration. Only ever touched under the mutex.
#[derive(Debug)]
struct WindowState {
    window_start: Instant,
    admitted: u32,
}

/// Gates operations against a fixed-window request budget.
///
/// One limiter per client; calls from any number of concurrent tasks share
/// the same window. The admission mutex is tokio's fair mutex, so waiters
/// queue FIFO: a caller that began waiting earlier is never overtaken by a
/// later one.
#[derive(Debug)]
pub struct RateLimiter {
    window: Mutex<WindowState>,
    max_requests: u32,
    window_duration: Duration,
    wait_timeout: Option<Duration>,
}

impl RateLimiter {
    /// Creates a limiter admitting `max_requests` per `window_duration`,
    /// with unbounded waiting.
    pub fn new(max_requests: u32, window_duration: Duration) -> Self {
        Self {
            window: Mutex::new(WindowState {
                window_start: Instant::now(),
                admitted: 0,
            }),
            max_requests: max_requests.max(1),
            window_duration,
            wait_timeout: None,
        }
    }

    /// Bounds how long [`run_gated`](Self::run_gated) may wait for
    /// admission before failing with [`Error::RateLimitWaitExhausted`].
    pub fn with_wait_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Runs `operation` once the current window has capacity.
    ///
    /// The operation's result or error passes through untouched; the
    /// limiter adds no retry semantics. The only error it can inject is
    /// `RateLimitWaitExhausted`, and only when a wait timeout was
    /// configured.
    pub async fn run_gated<F, Fut, T>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        match self.wait_timeout {
            None => self.admit().await,
            Some(limit) => {
                tokio::time::timeout(limit, self.admit())
                    .await
                    .map_err(|_| Error::RateLimitWaitExhausted { waited: limit })?;
            }
        }
        operation().await
    }

    /// Blocks (asynchronously) until this caller is admitted into the
    /// current window.
    ///
    /// The admission lock is held across the wait on purpose: while the
    /// window is saturated no later caller could be admitted anyway, and
    /// queueing on the fair mutex is what guarantees FIFO release order.
    /// The counter is only incremented at the admission instant, so a
    /// caller cancelled mid-wait leaves the bookkeeping untouched.
    async fn admit(&self) {
        let mut window = self.window.lock().await;
        loop {
            let now = Instant::now();
            let elapsed = now.duration_since(window.window_start);

            if elapsed >= self.window_duration {
                window.window_start = now;
                window.admitted = 0;
            }

            if window.admitted < self.max_requests {
                window.admitted += 1;
                log::trace!(
                    "rate limiter admitted request {}/{} in current window",
                    window.admitted,
                    self.max_requests
                );
                return;
            }

            let remaining = self.window_duration - elapsed;
            log::debug!(
                "rate limit window saturated ({} requests); waiting {:?}",
                window.admitted,
                remaining
            );
            tokio::time::sleep(remaining).await;
        }
    }
}
