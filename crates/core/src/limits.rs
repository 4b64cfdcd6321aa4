//! Ranking limits
//!
//! Constants shared by every ranking path. They are part of the result
//! contract: changing them changes which documents callers see.

/// Maximum number of documents returned by a single search
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal when ordering results;
/// the rating decides the order instead.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Default number of accumulator shards used by parallel ranking
pub const DEFAULT_ACCUMULATOR_SHARDS: usize = 16;
