//! Document types
//!
//! This module defines:
//! - DocumentId: caller-assigned document identity
//! - DocumentStatus: lifecycle label attached at insertion
//! - DocumentRecord: per-document metadata kept by the index
//! - Document: a ranked search result
//! - DocumentPredicate: filter applied to candidates during ranking

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned document identifier
///
/// Signed so that negative ids coming from callers can be detected and
/// rejected instead of silently wrapping.
pub type DocumentId = i32;

/// Status attached to a document when it is added
///
/// Immutable once the document is in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Current, searchable by default
    #[default]
    Actual,
    /// Outdated or off-topic
    Irrelevant,
    /// Blocked by moderation
    Banned,
    /// Logically removed
    Removed,
}

impl DocumentStatus {
    /// All statuses, in declaration order
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Actual,
        DocumentStatus::Irrelevant,
        DocumentStatus::Banned,
        DocumentStatus::Removed,
    ];

    /// Stable numeric code (declaration order)
    pub fn as_code(self) -> u8 {
        match self {
            DocumentStatus::Actual => 0,
            DocumentStatus::Irrelevant => 1,
            DocumentStatus::Banned => 2,
            DocumentStatus::Removed => 3,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// Metadata stored for every live document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document identifier
    pub id: DocumentId,
    /// Average of the ratings supplied at insertion
    pub rating: i32,
    /// Status supplied at insertion
    pub status: DocumentStatus,
}

/// A ranked search result
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: DocumentId,
    /// Accumulated TF-IDF relevance for the query
    pub relevance: f64,
    /// Document rating
    pub rating: i32,
}

impl Document {
    /// Create a new result entry
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Compute the rating stored for a document
///
/// Truncating integer average. The sum is accumulated in `i64` so large
/// rating lists cannot overflow; the average of `i32` values always fits
/// back into `i32`.
///
/// # Errors
///
/// Returns `InvalidArgument` when `ratings` is empty.
pub fn average_rating(ratings: &[i32]) -> Result<i32> {
    if ratings.is_empty() {
        return Err(Error::invalid_argument("ratings must not be empty"));
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    Ok((sum / ratings.len() as i64) as i32)
}

// ============================================================================
// DocumentPredicate
// ============================================================================

/// Filter applied to every candidate document during ranking
///
/// Implemented for closures `Fn(DocumentId, DocumentStatus, i32) -> bool`
/// and for [`DocumentStatus`] itself (keeps documents with that status).
/// Predicates must be `Sync` because the parallel ranker evaluates them
/// from several worker threads at once.
pub trait DocumentPredicate: Sync {
    /// Whether the document should be scored
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
{
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == *self
    }
}
