//! Search infrastructure for sieve
//!
//! This crate provides:
//! - WordSet: interned word pool with stable handles
//! - StopWords: words excluded from indexing and querying
//! - Basic whitespace tokenizer and word validation
//! - QueryParser: plus/minus/stop-word classification
//! - InvertedIndex: word -> document -> tf, with the document table
//! - Ranker: sequential and sharded-parallel TF-IDF top-K search
//! - SearchServer: facade selecting the strategy with `ExecutionMode`
//! - SearchConfig: construction-time options, loadable from TOML
//!
//! # Usage
//!
//! ```
//! use sieve_search::SearchServer;
//! use sieve_core::DocumentStatus;
//!
//! let mut server = SearchServer::with_stop_words_text("a the")?;
//! server.add_document(0, "a cat sat on the mat", DocumentStatus::Actual, &[5])?;
//!
//! let results = server.find_top_documents("cat mat")?;
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].rating, 5);
//! # Ok::<(), sieve_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod stop_words;
pub mod tokenizer;
pub mod word_set;

// Re-export commonly used types
pub use config::{SearchConfig, StopWordSource};
pub use index::{DocumentIds, DocumentMatch, InvertedIndex, Postings};
pub use query::{Query, QueryParser};
pub use ranker::{sort_documents, Ranker};
pub use server::SearchServer;
pub use stop_words::StopWords;
pub use tokenizer::{is_valid_word, split_into_words};
pub use word_set::{WordId, WordSet};
