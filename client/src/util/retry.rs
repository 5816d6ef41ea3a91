//! Fixed-delay retry for page mount loads, bound to the page lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The voting control page keeps reloading committees and statements until
//! they arrive. A retry must never outlive the page that scheduled it, so every
//! loop checks a [`Lifetime`] that the page ends in `on_cleanup`.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::net::api::ApiError;

/// Delay before a failed load is attempted again.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// What to do after a failed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    RetryAfter(Duration),
    Stop,
}

/// Committee loads always retry.
#[must_use]
pub fn committee_retry(_err: &ApiError) -> RetryDecision {
    RetryDecision::RetryAfter(RETRY_DELAY)
}

/// Statement loads retry unless the server says the voting date has not
/// arrived yet.
#[must_use]
pub fn statement_retry(err: &ApiError) -> RetryDecision {
    if err.is_voting_not_open() {
        RetryDecision::Stop
    } else {
        RetryDecision::RetryAfter(RETRY_DELAY)
    }
}

/// Liveness flag shared between a page and the tasks it spawned.
#[derive(Clone, Debug)]
pub struct Lifetime(Arc<AtomicBool>);

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owner as gone; pending retries stop at their next check.
    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Run `fetch` until it succeeds, `decide` says stop, or `lifetime` ends.
///
/// `on_error` runs once per failure, before the retry delay. Returns `None`
/// when the loop gave up or the owner went away; a value fetched after the
/// owner ended is dropped.
pub async fn load_with_retry<T, Fetch, FetchFut, Sleep, SleepFut, OnError>(
    lifetime: &Lifetime,
    mut fetch: Fetch,
    mut sleep: Sleep,
    decide: fn(&ApiError) -> RetryDecision,
    mut on_error: OnError,
) -> Option<T>
where
    Fetch: FnMut() -> FetchFut,
    FetchFut: Future<Output = Result<T, ApiError>>,
    Sleep: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
    OnError: FnMut(&ApiError),
{
    loop {
        if !lifetime.is_alive() {
            return None;
        }
        let result = fetch().await;
        if !lifetime.is_alive() {
            return None;
        }
        match result {
            Ok(value) => return Some(value),
            Err(err) => {
                on_error(&err);
                match decide(&err) {
                    RetryDecision::Stop => return None,
                    RetryDecision::RetryAfter(delay) => sleep(delay).await,
                }
            }
        }
    }
}

/// Browser timer used by pages; resolves immediately outside the browser.
pub async fn browser_sleep(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
