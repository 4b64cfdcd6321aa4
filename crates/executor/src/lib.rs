//! # Sieve Executor
//!
//! Operations layered on top of a [`SearchServer`](sieve_search::SearchServer):
//! - [`RequestQueue`] - sliding-window statistics over search requests
//! - [`process_queries`] / [`process_queries_joined`] - parallel query batches
//! - [`add_documents`] - bulk loading that skips invalid documents
//! - [`match_documents`] - one query against every live document
//!
//! ## Quick Start
//!
//! ```
//! use sieve_executor::{add_documents, process_queries_joined, NewDocument};
//! use sieve_search::SearchServer;
//! use sieve_core::DocumentStatus;
//!
//! let mut server = SearchServer::with_stop_words_text("and with")?;
//! let report = add_documents(&mut server, vec![
//!     NewDocument::new(1, "funny pet and nasty rat", DocumentStatus::Actual, vec![7, 2, 7]),
//!     NewDocument::new(2, "funny pet with curly hair", DocumentStatus::Actual, vec![1, 2]),
//!     NewDocument::new(2, "duplicate id", DocumentStatus::Actual, vec![1]),
//! ]);
//! assert_eq!(report.added, 2);
//! assert_eq!(report.skipped.len(), 1);
//!
//! let joined = process_queries_joined(&server, &["nasty rat", "curly hair"])?;
//! let ids: Vec<_> = joined.iter().map(|d| d.id).collect();
//! assert_eq!(ids, vec![1, 2]);
//! # Ok::<(), sieve_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batch;
mod request_queue;

pub use batch::{
    add_documents, match_documents, process_queries, process_queries_joined, BatchReport,
    NewDocument,
};
pub use request_queue::{RequestQueue, MINUTES_IN_DAY};

#[cfg(test)]
mod tests;
