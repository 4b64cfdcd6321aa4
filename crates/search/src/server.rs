//! Search server facade
//!
//! Owns the word pool, stop words and inverted index, plus the optional
//! dedicated worker pool. Every operation with a parallel variant takes an
//! [`ExecutionMode`] instead of exposing one method per strategy.
//!
//! # Usage
//!
//! ```
//! use sieve_search::SearchServer;
//! use sieve_core::{DocumentStatus, ExecutionMode};
//!
//! let mut server = SearchServer::with_stop_words(["and", "with"])?;
//! server.add_document(0, "white cat and fashionable collar", DocumentStatus::Actual, &[8, -3])?;
//! server.add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])?;
//!
//! let top = server.find_top_documents("fluffy cat")?;
//! assert_eq!(top[0].id, 1);
//!
//! let banned = server.find_top_documents_with(
//!     ExecutionMode::Parallel,
//!     "fluffy cat",
//!     &DocumentStatus::Banned,
//! )?;
//! assert!(banned.is_empty());
//! # Ok::<(), sieve_core::Error>(())
//! ```
//!
//! # Concurrency Contract
//!
//! Ranking and matching take `&self` and may be called from many threads.
//! Adding and removing documents take `&mut self`, so no search can be in
//! flight while the index changes.

use crate::config::{SearchConfig, StopWordSource};
use crate::index::{DocumentIds, DocumentMatch, InvertedIndex};
use crate::ranker::Ranker;
use rayon::{ThreadPool, ThreadPoolBuilder};
use sieve_core::{
    Document, DocumentId, DocumentPredicate, DocumentRecord, DocumentStatus, Error, ExecutionMode,
    Result,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// In-memory TF-IDF search server
#[derive(Debug)]
pub struct SearchServer {
    index: InvertedIndex,
    accumulator_shards: usize,
    /// Dedicated pool for parallel operations; `None` uses rayon's global pool
    pool: Option<ThreadPool>,
}

impl SearchServer {
    /// Create a server from a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for malformed stop words and `Config` for
    /// out-of-range options or a worker pool that cannot be started.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let index = match &config.stop_words {
            StopWordSource::List(words) => InvertedIndex::with_stop_words(words)?,
            StopWordSource::Text(text) => InvertedIndex::with_stop_words_text(text)?,
        };

        let pool = config
            .worker_threads
            .map(|threads| {
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("sieve-worker-{}", i))
                    .build()
                    .map_err(|e| Error::config(format!("failed to start worker pool: {}", e)))
            })
            .transpose()?;

        info!(
            target: "sieve::search",
            stop_words = index.stop_word_count(),
            accumulator_shards = config.accumulator_shards,
            worker_threads = ?config.worker_threads,
            "Search server created"
        );

        Ok(Self {
            index,
            accumulator_shards: config.accumulator_shards,
            pool,
        })
    }

    /// Create a server with the given stop words and default options
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SearchConfig::default().with_stop_words(words))
    }

    /// Create a server with whitespace-delimited stop words and default options
    pub fn with_stop_words_text(text: &str) -> Result<Self> {
        Self::new(SearchConfig::default().with_stop_words_text(text))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The underlying index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Shard count used by parallel ranking
    pub fn accumulator_shards(&self) -> usize {
        self.accumulator_shards
    }

    /// Size of the dedicated worker pool, if any
    pub fn worker_threads(&self) -> Option<usize> {
        self.pool.as_ref().map(ThreadPool::current_num_threads)
    }

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Live document ids, ascending
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.index.document_ids()
    }

    /// Metadata for a live document
    pub fn document(&self, id: DocumentId) -> Option<DocumentRecord> {
        self.index.document(id)
    }

    /// Word -> tf for a live document; empty for unknown ids
    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<&str, f64> {
        self.index.word_frequencies(id)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a document
    ///
    /// See [`InvertedIndex::add_document`]. Nothing changes on error.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.index.add_document(id, text, status, ratings)
    }

    /// Remove a document on the calling thread
    ///
    /// Unknown ids are ignored. Returns whether a document was removed.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        self.remove_document_with(ExecutionMode::Sequential, id)
    }

    /// Remove a document using the given strategy
    pub fn remove_document_with(&mut self, mode: ExecutionMode, id: DocumentId) -> bool {
        let index = &mut self.index;
        match (mode, &self.pool) {
            (ExecutionMode::Sequential, _) => index.remove_document(id),
            (ExecutionMode::Parallel, Some(pool)) => {
                pool.install(|| index.remove_document_parallel(id))
            }
            (ExecutionMode::Parallel, None) => index.remove_document_parallel(id),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Top documents with status [`DocumentStatus::Actual`], sequentially
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(ExecutionMode::Sequential, raw_query, &DocumentStatus::Actual)
    }

    /// Top documents passing `predicate`, using the given strategy
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the query is malformed.
    pub fn find_top_documents_with<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: &P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        let query = self.index.parse_query(raw_query)?;
        let ranker = Ranker::new(&self.index);

        let documents = match mode {
            ExecutionMode::Sequential => ranker.find_top_documents(&query, predicate),
            ExecutionMode::Parallel => self.install(|| {
                ranker.find_top_documents_parallel(&query, predicate, self.accumulator_shards)
            }),
        };

        debug!(
            target: "sieve::search",
            %mode,
            query = raw_query,
            results = documents.len(),
            "Search finished"
        );
        Ok(documents)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Match a query against one document, sequentially
    ///
    /// Returns `Ok(None)` for unknown ids.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<Option<DocumentMatch<'_>>> {
        self.match_document_with(ExecutionMode::Sequential, raw_query, id)
    }

    /// Match a query against one document using the given strategy
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the query is malformed.
    pub fn match_document_with(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<Option<DocumentMatch<'_>>> {
        let query = self.index.parse_query(raw_query)?;
        let matched = match mode {
            ExecutionMode::Sequential => self.index.match_document(&query, id),
            ExecutionMode::Parallel => {
                self.install(|| self.index.match_document_parallel(&query, id))
            }
        };
        Ok(matched)
    }

    /// Run `op` inside the dedicated pool when there is one
    fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocumentId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> DocumentIds<'a> {
        self.document_ids()
    }
}
