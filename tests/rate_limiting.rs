// tests/rate_limiting.rs
//! Timing properties of the rate limiter, run on tokio's paused clock so
//! no test actually sleeps.

use notionkit::{Error, RateLimiter};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn no_window_ever_holds_more_than_the_budget() {
    const BUDGET: usize = 3;
    const WINDOW: Duration = Duration::from_millis(1000);

    let limiter = Arc::new(RateLimiter::new(BUDGET as u32, WINDOW));
    let admissions = Arc::new(Mutex::new(Vec::<Instant>::new()));

    let mut handles = Vec::new();
    for _ in 0..11 {
        let limiter = Arc::clone(&limiter);
        let admissions = Arc::clone(&admissions);
        handles.push(tokio::spawn(async move {
            limiter
                .run_gated(|| async {
                    admissions.lock().await.push(Instant::now());
                    Ok::<_, Error>(())
                })
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let admissions = admissions.lock().await;
    assert_eq!(admissions.len(), 11);
    for &start in admissions.iter() {
        let in_window = admissions
            .iter()
            .filter(|&&t| t >= start && t.duration_since(start) < WINDOW)
            .count();
        assert!(
            in_window <= BUDGET,
            "{} admissions inside one window of {:?}",
            in_window,
            WINDOW
        );
    }
}

#[tokio::test(start_paused = true)]
async fn queued_callers_are_released_in_arrival_order() {
    let limiter = Arc::new(RateLimiter::new(2, Duration::from_millis(1000)));
    let order = Arc::new(Mutex::new(Vec::<usize>::new()));

    let mut handles = Vec::new();
    for caller in 0..6 {
        let limiter = Arc::clone(&limiter);
        let order = Arc::clone(&order);
        handles.push(tokio::spawn(async move {
            // Stagger arrival so "earlier" is well-defined; the paused
            // clock makes these sleeps deterministic.
            tokio::time::sleep(Duration::from_millis(caller as u64)).await;
            limiter
                .run_gated(|| async {
                    order.lock().await.push(caller);
                    Ok::<_, Error>(())
                })
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(*order.lock().await, vec![0, 1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn saturated_window_delays_exactly_until_rollover() {
    let limiter = RateLimiter::new(2, Duration::from_millis(500));
    let start = Instant::now();

    for _ in 0..2 {
        limiter
            .run_gated(|| async { Ok::<_, Error>(()) })
            .await
            .unwrap();
    }
    assert_eq!(start.elapsed(), Duration::ZERO);

    limiter
        .run_gated(|| async { Ok::<_, Error>(()) })
        .await
        .unwrap();
    let waited = start.elapsed();
    assert!(waited >= Duration::from_millis(500));
    assert!(waited < Duration::from_millis(600));
}

#[tokio::test(start_paused = true)]
async fn separately_constructed_limiters_are_independent() {
    let a = RateLimiter::new(1, Duration::from_millis(1000));
    let b = RateLimiter::new(1, Duration::from_millis(1000));

    let start = Instant::now();
    a.run_gated(|| async { Ok::<_, Error>(()) }).await.unwrap();
    b.run_gated(|| async { Ok::<_, Error>(()) }).await.unwrap();

    // b's window is untouched by a's admission.
    assert_eq!(start.elapsed(), Duration::ZERO);
}
