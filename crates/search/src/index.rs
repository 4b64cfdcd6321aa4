//! Inverted index for TF-IDF search
//!
//! This module provides:
//! - InvertedIndex with per-word posting maps (document id -> tf)
//! - The document table (rating, status, per-document word list)
//! - All-or-nothing document insertion
//! - Sequential and parallel document removal
//! - Sequential and parallel query matching against one document
//!
//! # Invariants
//!
//! - A word's posting map contains D iff live document D contains the word
//! - Posting maps are never empty: the last removal drops the word's entry,
//!   so every indexed word has a well-defined IDF
//! - A failed `add_document` mutates nothing, not even the word pool
//!
//! # Thread Safety
//!
//! The index has no internal lock. Mutation needs `&mut self`; ranking and
//! matching need `&self` and may run from many threads at once.

use crate::query::{Query, QueryParser};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, split_into_words};
use crate::word_set::{WordId, WordSet};
use rayon::prelude::*;
use sieve_core::{average_rating, DocumentId, DocumentRecord, DocumentStatus, Error, Result};
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use tracing::debug;

/// Documents containing a word, with the word's term frequency in each
pub type Postings = BTreeMap<DocumentId, f64>;

// ============================================================================
// DocumentMatch
// ============================================================================

/// Result of matching a query against one document
///
/// `words` borrow from the index's word pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMatch<'a> {
    /// Matched document
    pub id: DocumentId,
    /// Plus-words present in the document, sorted; empty if any
    /// minus-word is present
    pub words: Vec<&'a str>,
    /// Status of the document, reported even when `words` is empty
    pub status: DocumentStatus,
}

impl DocumentMatch<'_> {
    /// Whether the document matched no plus-word (or was excluded)
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// `{ document_id = 1, status = 0, words = cat fluffy}`, with the status as
/// its numeric code
impl fmt::Display for DocumentMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, status = {}, words =",
            self.id,
            self.status.as_code()
        )?;
        for word in &self.words {
            write!(f, " {}", word)?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// DocumentIds
// ============================================================================

/// Ascending iterator over live document ids
#[derive(Debug, Clone)]
pub struct DocumentIds<'a> {
    inner: btree_map::Keys<'a, DocumentId, DocumentData>,
}

impl Iterator for DocumentIds<'_> {
    type Item = DocumentId;

    fn next(&mut self) -> Option<DocumentId> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for DocumentIds<'_> {
    fn next_back(&mut self) -> Option<DocumentId> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for DocumentIds<'_> {}

// ============================================================================
// InvertedIndex
// ============================================================================

#[derive(Debug, Clone)]
struct DocumentData {
    record: DocumentRecord,
    /// Word -> tf for this document, mirrors the postings
    word_freqs: BTreeMap<WordId, f64>,
}

/// Word -> document -> term frequency index with its document table
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Interned words (stop words and document words)
    words: WordSet,

    /// Words excluded from indexing and querying
    stop_words: StopWords,

    /// Word -> posting map
    postings: BTreeMap<WordId, Postings>,

    /// Live documents
    documents: BTreeMap<DocumentId, DocumentData>,
}

impl InvertedIndex {
    /// Create an empty index without stop words
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with the given stop words
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any stop word contains a control
    /// character.
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = WordSet::new();
        let stop_words = StopWords::from_words(stop_words, &mut words)?;
        Ok(Self {
            words,
            stop_words,
            ..Self::default()
        })
    }

    /// Create an empty index with stop words given as whitespace-delimited text
    pub fn with_stop_words_text(text: &str) -> Result<Self> {
        Self::with_stop_words(split_into_words(text))
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct words with at least one live document
    pub fn indexed_word_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of interned words, including stop words and words whose
    /// documents were all removed
    pub fn pool_size(&self) -> usize {
        self.words.len()
    }

    /// Number of stop words
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Number of live documents containing `word`
    pub fn documents_containing(&self, word: &str) -> usize {
        self.postings(word).map_or(0, BTreeMap::len)
    }

    /// Inverse document frequency: `ln(N / df)`
    ///
    /// Returns `None` for words that are not in the index.
    pub fn inverse_document_freq(&self, word: &str) -> Option<f64> {
        self.postings(word).map(|docs| self.idf_of(docs))
    }

    pub(crate) fn idf_of(&self, docs: &Postings) -> f64 {
        (self.documents.len() as f64 / docs.len() as f64).ln()
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Posting map for a word, if any live document contains it
    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.words.get(word).and_then(|id| self.postings.get(&id))
    }

    /// Metadata for a live document
    pub fn document(&self, id: DocumentId) -> Option<DocumentRecord> {
        self.documents.get(&id).map(|d| d.record)
    }

    /// Whether the document is live
    pub fn contains_document(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Live document ids, ascending
    pub fn document_ids(&self) -> DocumentIds<'_> {
        DocumentIds {
            inner: self.documents.keys(),
        }
    }

    /// Word -> tf for a live document; empty for unknown ids
    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<&str, f64> {
        self.documents
            .get(&id)
            .map(|doc| {
                doc.word_freqs
                    .iter()
                    .map(|(&word, &tf)| (self.words.resolve(word), tf))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the stop-word set contains `word`
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.is_stop_word(&self.words, word)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Parser bound to this index's stop words
    pub fn parser(&self) -> QueryParser<'_> {
        QueryParser::new(&self.words, &self.stop_words)
    }

    /// Parse raw query text against this index's stop words
    pub fn parse_query<'q>(&self, raw_query: &'q str) -> Result<Query<'q>> {
        self.parser().parse(raw_query)
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Add a document
    ///
    /// Every non-stop word occurrence adds `1 / word_count` to that word's
    /// tf for `id`. A document consisting only of stop words is accepted
    /// and indexed with no words.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `id` is negative or already present,
    /// `ratings` is empty, or a word contains a control character. Nothing
    /// is modified when an error is returned.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::invalid_argument(format!(
                "document id {} is negative",
                id
            )));
        }
        if self.documents.contains_key(&id) {
            return Err(Error::invalid_argument(format!(
                "document id {} already exists",
                id
            )));
        }
        let rating = average_rating(ratings)?;

        // Stage: validate and compute tf before touching the pool or postings
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "word {:?} in document {} contains a control character",
                    word, id
                )));
            }
            if !self.is_stop_word(word) {
                words.push(word);
            }
        }

        let inv_word_count = 1.0 / words.len() as f64;
        let mut staged: BTreeMap<&str, f64> = BTreeMap::new();
        for &word in &words {
            *staged.entry(word).or_insert(0.0) += inv_word_count;
        }

        // Commit
        let mut word_freqs = BTreeMap::new();
        for (word, tf) in staged {
            let word_id = self.words.intern(word);
            self.postings.entry(word_id).or_default().insert(id, tf);
            word_freqs.insert(word_id, tf);
        }

        debug!(
            target: "sieve::search",
            document_id = id,
            words = words.len(),
            distinct_words = word_freqs.len(),
            rating,
            %status,
            "Document added"
        );

        self.documents.insert(
            id,
            DocumentData {
                record: DocumentRecord { id, rating, status },
                word_freqs,
            },
        );
        Ok(())
    }

    /// Remove a document, walking only its own words
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        let Some(doc) = self.documents.remove(&id) else {
            return false;
        };

        for word in doc.word_freqs.keys() {
            if let Some(docs) = self.postings.get_mut(word) {
                docs.remove(&id);
                if docs.is_empty() {
                    self.postings.remove(word);
                }
            }
        }

        debug!(target: "sieve::search", document_id = id, "Document removed");
        true
    }

    /// Remove a document, partitioning all posting maps across the current
    /// rayon pool
    ///
    /// Each posting map is visited by exactly one worker.
    pub fn remove_document_parallel(&mut self, id: DocumentId) -> bool {
        if self.documents.remove(&id).is_none() {
            return false;
        }

        self.postings.par_iter_mut().for_each(|(_, docs)| {
            docs.remove(&id);
        });
        self.postings.retain(|_, docs| !docs.is_empty());

        debug!(
            target: "sieve::search",
            document_id = id,
            mode = "parallel",
            "Document removed"
        );
        true
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Match a parsed query against one document
    ///
    /// Returns `None` for unknown ids. When any minus-word occurs in the
    /// document the word list is empty but the status is still reported.
    pub fn match_document(&self, query: &Query<'_>, id: DocumentId) -> Option<DocumentMatch<'_>> {
        let doc = self.documents.get(&id)?;

        let excluded = query
            .minus_words
            .iter()
            .any(|word| self.word_in_document(doc, word).is_some());

        let words = if excluded {
            Vec::new()
        } else {
            let mut words: Vec<&str> = query
                .plus_words
                .iter()
                .filter_map(|word| self.word_in_document(doc, word))
                .collect();
            words.sort_unstable();
            words
        };

        Some(DocumentMatch {
            id,
            words,
            status: doc.record.status,
        })
    }

    /// Parallel form of [`InvertedIndex::match_document`]
    ///
    /// Plus- and minus-word lookups are split across the current rayon pool.
    pub fn match_document_parallel(
        &self,
        query: &Query<'_>,
        id: DocumentId,
    ) -> Option<DocumentMatch<'_>> {
        let doc = self.documents.get(&id)?;

        let excluded = query
            .minus_words
            .par_iter()
            .any(|word| self.word_in_document(doc, word).is_some());

        let words = if excluded {
            Vec::new()
        } else {
            let mut words: Vec<&str> = query
                .plus_words
                .par_iter()
                .filter_map(|word| self.word_in_document(doc, word))
                .collect();
            words.par_sort_unstable();
            words
        };

        Some(DocumentMatch {
            id,
            words,
            status: doc.record.status,
        })
    }

    /// Pool view of `word` if the document contains it
    fn word_in_document(&self, doc: &DocumentData, word: &str) -> Option<&str> {
        let id = self.words.get(word)?;
        doc.word_freqs
            .contains_key(&id)
            .then(|| self.words.resolve(id))
    }
}

// ============================================================================
// Tests
// ============================================================================
