//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

pub use sieve::{
    Document, DocumentId, DocumentStatus, ExecutionMode, SearchConfig, SearchServer,
};

// ============================================================================
// Fixtures
// ============================================================================

/// The pet corpus used across suites
pub const PET_DOCUMENTS: [(DocumentId, &str, DocumentStatus, &[i32]); 6] = [
    (0, "white cat and fashionable collar", DocumentStatus::Actual, &[8, -3]),
    (1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7]),
    (2, "groomed dog expressive eyes", DocumentStatus::Actual, &[5, -12, 2, 1]),
    (3, "groomed starling eugene", DocumentStatus::Banned, &[9]),
    (4, "curly dog in a fancy collar", DocumentStatus::Irrelevant, &[3, 3]),
    (5, "big cat on the mat", DocumentStatus::Removed, &[-2]),
];

/// Server over [`PET_DOCUMENTS`] with stop words "and in on"
pub fn pet_server(config: SearchConfig) -> SearchServer {
    let mut server = SearchServer::new(config.with_stop_words_text("and in on")).unwrap();
    for (id, text, status, ratings) in PET_DOCUMENTS {
        server.add_document(id, text, status, ratings).unwrap();
    }
    server
}

/// Ids in result order
pub fn ids(docs: &[Document]) -> Vec<DocumentId> {
    docs.iter().map(|d| d.id).collect()
}

/// (id, rating) pairs in result order
pub fn id_ratings(docs: &[Document]) -> Vec<(DocumentId, i32)> {
    docs.iter().map(|d| (d.id, d.rating)).collect()
}

/// Deterministic corpus of `count` documents over a small vocabulary
pub fn synthetic_server(count: i32, config: SearchConfig) -> SearchServer {
    const WORDS: [&str; 10] = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    ];
    let mut server = SearchServer::new(config).unwrap();
    let mut state: u64 = 0x5EED;
    for id in 0..count {
        let text: Vec<&str> = (0..6)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                WORDS[(state >> 33) as usize % WORDS.len()]
            })
            .collect();
        let status = DocumentStatus::ALL[id as usize % DocumentStatus::ALL.len()];
        server
            .add_document(id, &text.join(" "), status, &[id % 11 - 5])
            .unwrap();
    }
    server
}
