//! Batch operations over a search server.
//!
//! - [`process_queries`] / [`process_queries_joined`] evaluate many queries
//!   at once, fanned out across rayon workers
//! - [`add_documents`] loads documents, skipping the invalid ones
//! - [`match_documents`] matches one query against every live document

use rayon::prelude::*;
use sieve_core::{Document, DocumentId, DocumentStatus, Error, Result};
use sieve_search::{DocumentMatch, SearchServer};
use tracing::{debug, warn};

// ============================================================================
// Queries
// ============================================================================

/// Run the default search for every query.
///
/// `results[i]` corresponds to `queries[i]`. Queries are evaluated in
/// parallel; the whole batch fails with the first error in query order.
///
/// # Example
///
/// ```
/// use sieve_executor::process_queries;
/// use sieve_search::SearchServer;
/// use sieve_core::DocumentStatus;
///
/// let mut server = SearchServer::with_stop_words_text("and with")?;
/// server.add_document(1, "funny pet and nasty rat", DocumentStatus::Actual, &[7, 2, 7])?;
/// server.add_document(2, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2])?;
///
/// let results = process_queries(&server, &["nasty rat", "curly hair", "big dog"])?;
/// assert_eq!(results[0].len(), 1);
/// assert_eq!(results[1][0].id, 2);
/// assert!(results[2].is_empty());
/// # Ok::<(), sieve_core::Error>(())
/// ```
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    let outcomes: Vec<Result<Vec<Document>>> = queries
        .par_iter()
        .map(|query| server.find_top_documents(query.as_ref()))
        .collect();
    let results: Result<Vec<_>> = outcomes.into_iter().collect();

    debug!(
        target: "sieve::executor",
        queries = queries.len(),
        ok = results.is_ok(),
        "Query batch processed"
    );
    results
}

/// Like [`process_queries`], with the per-query results concatenated in
/// query order.
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?.into_iter().flatten().collect())
}

// ============================================================================
// Document loading
// ============================================================================

/// A document waiting to be indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    /// Caller-chosen id
    pub id: DocumentId,
    /// Document text
    pub text: String,
    /// Document status
    pub status: DocumentStatus,
    /// Ratings averaged into the document rating
    pub ratings: Vec<i32>,
}

impl NewDocument {
    /// Create a document description
    pub fn new(
        id: DocumentId,
        text: impl Into<String>,
        status: DocumentStatus,
        ratings: Vec<i32>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            status,
            ratings,
        }
    }
}

/// Outcome of [`add_documents`]
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Documents added
    pub added: usize,
    /// Rejected documents with the reason, in input order
    pub skipped: Vec<(DocumentId, Error)>,
}

impl BatchReport {
    /// Whether every document was added
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Add documents in order, skipping the ones the server rejects
pub fn add_documents<I>(server: &mut SearchServer, documents: I) -> BatchReport
where
    I: IntoIterator<Item = NewDocument>,
{
    let mut report = BatchReport::default();

    for doc in documents {
        match server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
            Ok(()) => report.added += 1,
            Err(e) => {
                warn!(target: "sieve::executor", id = doc.id, error = %e, "Skipping document");
                report.skipped.push((doc.id, e));
            }
        }
    }

    debug!(
        target: "sieve::executor",
        added = report.added,
        skipped = report.skipped.len(),
        "Document batch loaded"
    );
    report
}

// ============================================================================
// Matching
// ============================================================================

/// Match `raw_query` against every live document, in id order
///
/// # Errors
///
/// Returns `InvalidArgument` if the query is malformed.
pub fn match_documents<'a>(
    server: &'a SearchServer,
    raw_query: &str,
) -> Result<Vec<(DocumentId, DocumentMatch<'a>)>> {
    let index = server.index();
    let query = index.parse_query(raw_query)?;

    Ok(index
        .document_ids()
        .filter_map(|id| index.match_document(&query, id).map(|matched| (id, matched)))
        .collect())
}
