//! TF-IDF ranking
//!
//! This module provides:
//! - Ranker: sequential and parallel top-K search over an InvertedIndex
//! - sort_documents: the result ordering shared by both paths
//!
//! # Algorithm
//!
//! For each plus-word present in the index:
//!   idf = ln(N / df)
//!   relevance[doc] += tf(word, doc) * idf   (for docs passing the predicate)
//!
//! Then every document containing a minus-word is dropped, the rest are
//! sorted and truncated to [`MAX_RESULT_DOCUMENT_COUNT`].
//!
//! The parallel path splits each posting map across rayon workers that add
//! into a [`ConcurrentAccumulator`]; everything after accumulation is
//! shared with the sequential path.

use crate::index::InvertedIndex;
use crate::query::Query;
use rayon::prelude::*;
use sieve_concurrency::ConcurrentAccumulator;
use sieve_core::{
    Document, DocumentId, DocumentPredicate, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Ranks documents of one index against parsed queries
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Ranker<'a> {
    /// Create a ranker over `index`
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Top documents for `query`, evaluated on the calling thread
    pub fn find_top_documents<P>(&self, query: &Query<'_>, predicate: &P) -> Vec<Document>
    where
        P: DocumentPredicate + ?Sized,
    {
        let relevance = self.accumulate(query, predicate);
        self.finish(query, relevance, "sequential")
    }

    /// Top documents for `query`, accumulated on the current rayon pool
    ///
    /// `shard_count` sets the accumulator's lock granularity.
    pub fn find_top_documents_parallel<P>(
        &self,
        query: &Query<'_>,
        predicate: &P,
        shard_count: usize,
    ) -> Vec<Document>
    where
        P: DocumentPredicate + ?Sized,
    {
        let relevance = self.accumulate_parallel(query, predicate, shard_count);
        self.finish(query, relevance, "parallel")
    }

    /// Relevance of every candidate, before minus-word exclusion
    fn accumulate<P>(&self, query: &Query<'_>, predicate: &P) -> BTreeMap<DocumentId, f64>
    where
        P: DocumentPredicate + ?Sized,
    {
        let mut relevance = BTreeMap::new();
        for word in &query.plus_words {
            let Some(docs) = self.index.postings(word) else {
                continue;
            };
            let idf = self.index.idf_of(docs);
            for (&id, &tf) in docs {
                if self.passes(id, predicate) {
                    *relevance.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }
        relevance
    }

    fn accumulate_parallel<P>(
        &self,
        query: &Query<'_>,
        predicate: &P,
        shard_count: usize,
    ) -> BTreeMap<DocumentId, f64>
    where
        P: DocumentPredicate + ?Sized,
    {
        let relevance: ConcurrentAccumulator<DocumentId, f64> =
            ConcurrentAccumulator::new(shard_count);

        for word in &query.plus_words {
            let Some(docs) = self.index.postings(word) else {
                continue;
            };
            let idf = self.index.idf_of(docs);
            docs.par_iter().for_each(|(&id, &tf)| {
                if self.passes(id, predicate) {
                    *relevance.at(id) += tf * idf;
                }
            });
        }

        relevance.snapshot()
    }

    fn passes<P>(&self, id: DocumentId, predicate: &P) -> bool
    where
        P: DocumentPredicate + ?Sized,
    {
        self.index
            .document(id)
            .is_some_and(|doc| predicate.matches(id, doc.status, doc.rating))
    }

    /// Exclude minus-words, materialize, sort and truncate
    fn finish(
        &self,
        query: &Query<'_>,
        mut relevance: BTreeMap<DocumentId, f64>,
        mode: &'static str,
    ) -> Vec<Document> {
        let candidates = relevance.len();

        for word in &query.minus_words {
            if let Some(docs) = self.index.postings(word) {
                for id in docs.keys() {
                    relevance.remove(id);
                }
            }
        }

        let mut documents: Vec<Document> = relevance
            .into_iter()
            .filter_map(|(id, score)| {
                self.index
                    .document(id)
                    .map(|doc| Document::new(id, score, doc.rating))
            })
            .collect();

        sort_documents(&mut documents);
        documents.truncate(MAX_RESULT_DOCUMENT_COUNT);

        debug!(
            target: "sieve::search",
            mode,
            plus_words = query.plus_words.len(),
            minus_words = query.minus_words.len(),
            candidates,
            results = documents.len(),
            "Ranking complete"
        );

        documents
    }
}

/// Order documents by descending relevance, then descending rating
///
/// Relevances within [`RELEVANCE_EPSILON`] of a run's leading document are
/// treated as equal and ordered by rating. Remaining ties fall back to
/// ascending id, so the order is total and reproducible.
///
/// Runs are anchored on their leader, not chained through neighbours:
/// with relevances `1.0`, `1.0 - 0.9e-6` and `1.0 - 1.5e-6`, the third
/// document starts a new run and follows the second even when its rating
/// is higher, although the two are within epsilon of each other.
pub fn sort_documents(documents: &mut [Document]) {
    documents.sort_by(|lhs, rhs| {
        rhs.relevance
            .total_cmp(&lhs.relevance)
            .then_with(|| lhs.id.cmp(&rhs.id))
    });

    let mut start = 0;
    while start < documents.len() {
        let lead = documents[start].relevance;
        let run = documents[start..]
            .iter()
            .take_while(|doc| lead - doc.relevance < RELEVANCE_EPSILON)
            .count();
        documents[start..start + run].sort_by(|lhs, rhs| {
            rhs.rating
                .cmp(&lhs.rating)
                .then_with(|| lhs.id.cmp(&rhs.id))
        });
        start += run;
    }
}
