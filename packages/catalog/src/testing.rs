//! Testing utilities including a scriptable feed.
//!
//! Useful for exercising the store and anything built on it without an
//! HTTP endpoint.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{FeedError, FeedResult};
use crate::source::FeedSource;
use crate::types::RawCertRecord;

/// A [`FeedSource`] that replays scripted responses in order.
///
/// Responses are consumed front to back. A final successful response is
/// sticky and is returned for every later call; once the script runs out
/// otherwise, calls fail with a transport error.
#[derive(Default)]
pub struct MockFeed {
    responses: Mutex<VecDeque<FeedResult<Vec<RawCertRecord>>>>,
    latency: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_records(self, records: Vec<RawCertRecord>) -> Self {
        self.push(Ok(records));
        self
    }

    /// Queue a failed response.
    pub fn with_error(self, error: FeedError) -> Self {
        self.push(Err(error));
        self
    }

    /// Delay every response.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn push(&self, response: FeedResult<Vec<RawCertRecord>>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    fn next_response(&self) -> FeedResult<Vec<RawCertRecord>> {
        let mut responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        if responses.len() == 1 {
            if let Some(Ok(records)) = responses.front() {
                return Ok(records.clone());
            }
        }
        responses
            .pop_front()
            .unwrap_or_else(|| Err(FeedError::Transport("mock feed has no scripted response".into())))
    }
}

#[async_trait]
impl FeedSource for MockFeed {
    async fn fetch_records(&self) -> FeedResult<Vec<RawCertRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let response = self.next_response();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}
