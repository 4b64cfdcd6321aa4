//! Sliding-window request statistics.
//!
//! The [`RequestQueue`] wraps a [`SearchServer`] and records how many
//! documents each search returned. Every request advances a logical clock
//! by one minute; only the requests from the last day are retained.
//!
//! # Usage
//!
//! ```
//! use sieve_executor::RequestQueue;
//! use sieve_search::SearchServer;
//! use sieve_core::DocumentStatus;
//!
//! let mut server = SearchServer::with_stop_words_text("and in at")?;
//! server.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])?;
//!
//! let mut queue = RequestQueue::new(&server);
//! queue.add_find_request("empty request")?;
//! queue.add_find_request("curly cat")?;
//! assert_eq!(queue.no_result_requests(), 1);
//! # Ok::<(), sieve_core::Error>(())
//! ```

use std::collections::VecDeque;

use sieve_core::{Document, DocumentPredicate, DocumentStatus, ExecutionMode, Result};
use sieve_search::SearchServer;
use tracing::trace;

/// Length of the retention window, in clock ticks
pub const MINUTES_IN_DAY: u64 = 1440;

#[derive(Debug, Clone, Copy)]
struct RequestRecord {
    tick: u64,
    result_count: usize,
}

/// Records search outcomes over a sliding one-day window.
///
/// The queue borrows the server, so documents cannot change while it is
/// alive.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<RequestRecord>,
    current_tick: u64,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Create an empty queue over `server`
    pub fn new(server: &'a SearchServer) -> Self {
        Self {
            server,
            requests: VecDeque::new(),
            current_tick: 0,
            no_result_count: 0,
        }
    }

    /// Search for [`DocumentStatus::Actual`] documents and record the outcome
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, &DocumentStatus::Actual)
    }

    /// Search for documents with `status` and record the outcome
    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, &status)
    }

    /// Search with an arbitrary predicate and record the outcome
    ///
    /// # Errors
    ///
    /// Propagates the search error. A failed request is not recorded and
    /// does not advance the clock.
    pub fn add_find_request_with<P>(
        &mut self,
        raw_query: &str,
        predicate: &P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        let results = self.server.find_top_documents_with(
            ExecutionMode::Sequential,
            raw_query,
            predicate,
        )?;
        self.record(results.len());
        Ok(results)
    }

    /// Retained requests that returned no documents
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    /// Number of retained requests
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no requests are retained
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Current logical time
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    fn record(&mut self, result_count: usize) {
        self.current_tick += 1;

        while let Some(oldest) = self.requests.front() {
            if self.current_tick - oldest.tick < MINUTES_IN_DAY {
                break;
            }
            if oldest.result_count == 0 {
                self.no_result_count -= 1;
            }
            self.requests.pop_front();
        }

        if result_count == 0 {
            self.no_result_count += 1;
        }
        self.requests.push_back(RequestRecord {
            tick: self.current_tick,
            result_count,
        });

        trace!(
            target: "sieve::executor",
            tick = self.current_tick,
            result_count,
            retained = self.requests.len(),
            "Request recorded"
        );
    }
}
