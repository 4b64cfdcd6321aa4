//! Core types for Sieve
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId, DocumentStatus, DocumentRecord: document identity and metadata
//! - Document: ranked search result
//! - DocumentPredicate: candidate filter used while ranking
//! - ExecutionMode: sequential vs parallel strategy selection
//! - Error: Error type hierarchy
//! - Limits: result count and relevance tolerance constants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod limits;
pub mod types;

pub use document::{
    average_rating, Document, DocumentId, DocumentPredicate, DocumentRecord, DocumentStatus,
};
pub use error::{Error, Result};
pub use limits::{DEFAULT_ACCUMULATOR_SHARDS, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
pub use types::ExecutionMode;
