//! Sieve - in-memory TF-IDF document index
//!
//! Sieve stores short text documents and answers free-text queries with the
//! top-ranked documents by TF-IDF relevance, breaking near-ties by rating.
//! Queries support minus-words, stop words are dropped everywhere, and
//! every ranking, matching and removal operation has a parallel strategy.
//!
//! # Quick Start
//!
//! ```
//! use sieve::{DocumentStatus, ExecutionMode, SearchServer};
//!
//! let mut server = SearchServer::with_stop_words_text("and in on")?;
//! server.add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])?;
//! server.add_document(2, "groomed dog expressive eyes", DocumentStatus::Actual, &[5, -12, 2, 1])?;
//!
//! let top = server.find_top_documents("fluffy groomed cat")?;
//! assert_eq!(top[0].id, 1);
//!
//! let par = server.find_top_documents_with(
//!     ExecutionMode::Parallel,
//!     "fluffy groomed cat",
//!     &DocumentStatus::Actual,
//! )?;
//! assert_eq!(par.len(), top.len());
//! # Ok::<(), sieve::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `sieve-core`: document types, errors and shared constants
//! - `sieve-concurrency`: the sharded [`ConcurrentAccumulator`]
//! - `sieve-search`: word pool, query parser, inverted index, ranker and
//!   the [`SearchServer`] facade
//! - `sieve-executor`: request statistics and batch operations

pub use sieve_concurrency::{Access, ConcurrentAccumulator, ShardKey};
pub use sieve_core::*;
pub use sieve_executor::*;
pub use sieve_search::*;
