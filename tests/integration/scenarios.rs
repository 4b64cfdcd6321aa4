//! Worked ranking examples and edge cases.

use crate::common::*;

#[test]
fn idf_zero_single_document() {
    let mut server = SearchServer::with_stop_words(["a", "the"]).unwrap();
    server
        .add_document(0, "a cat sat on the mat", DocumentStatus::Actual, &[5])
        .unwrap();

    let results = server.find_top_documents("cat mat").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 0);
    assert_eq!(results[0].rating, 5);
    assert_eq!(results[0].relevance, 0.0);
}

#[test]
fn equal_relevance_orders_by_rating() {
    let mut server = SearchServer::with_stop_words_text("").unwrap();
    server
        .add_document(0, "white cat", DocumentStatus::Actual, &[8, -3])
        .unwrap();
    server
        .add_document(1, "black cat", DocumentStatus::Actual, &[5, 5])
        .unwrap();

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let results = server
            .find_top_documents_with(mode, "cat", &DocumentStatus::Actual)
            .unwrap();
        assert_eq!(id_ratings(&results), vec![(1, 5), (0, 2)]);
    }
}

#[test]
fn malformed_and_empty_queries() {
    let server = pet_server(SearchConfig::default());

    assert!(server.find_top_documents("--cat").unwrap_err().is_invalid_argument());
    assert!(server.find_top_documents("cat-").unwrap_err().is_invalid_argument());
    assert!(server.find_top_documents("").unwrap().is_empty());
    assert!(server.find_top_documents("   ").unwrap().is_empty());
}

#[test]
fn tf_idf_ordering() {
    let server = pet_server(SearchConfig::default());

    let results = server.find_top_documents("fluffy groomed cat").unwrap();
    assert_eq!(ids(&results), vec![1, 2, 0]);

    let fluffy = (6.0f64).ln() * 0.5;
    let cat = 2.0f64.ln() * 0.25;
    assert!((results[0].relevance - (fluffy + cat)).abs() < 1e-9);
}

#[test]
fn stop_words_never_rank() {
    let server = pet_server(SearchConfig::default());
    assert!(server.find_top_documents("and in on").unwrap().is_empty());
    assert_eq!(server.word_frequencies(0).get("and"), None);
}

#[test]
fn minus_word_only_query() {
    let server = pet_server(SearchConfig::default());
    assert!(server.find_top_documents("-cat").unwrap().is_empty());
}

#[test]
fn predicate_sees_every_status() {
    let server = pet_server(SearchConfig::default());
    let any = |_: DocumentId, _: DocumentStatus, _: i32| true;

    let results = server
        .find_top_documents_with(ExecutionMode::Sequential, "cat dog groomed", &any)
        .unwrap();
    assert_eq!(results.len(), sieve::MAX_RESULT_DOCUMENT_COUNT);

    for status in DocumentStatus::ALL {
        let filtered = server
            .find_top_documents_with(ExecutionMode::Sequential, "cat dog groomed", &status)
            .unwrap();
        for doc in &filtered {
            assert_eq!(server.document(doc.id).unwrap().status, status);
        }
    }
}

#[test]
fn document_display() {
    let doc = Document::new(3, 0.5, 7);
    assert_eq!(
        doc.to_string(),
        "{ document_id = 3, relevance = 0.5, rating = 7 }"
    );
}

#[test]
fn document_match_display() {
    let server = pet_server(SearchConfig::default());

    let matched = server.match_document("fluffy cat -collar", 1).unwrap().unwrap();
    assert_eq!(
        matched.to_string(),
        "{ document_id = 1, status = 0, words = cat fluffy}"
    );

    let excluded = server.match_document("groomed -starling", 3).unwrap().unwrap();
    assert_eq!(excluded.to_string(), "{ document_id = 3, status = 2, words =}");
}

#[test]
fn add_then_remove_restores_counts() {
    let mut server = pet_server(SearchConfig::default());
    let count = server.document_count();
    let cat = server.index().documents_containing("cat");

    server
        .add_document(10, "cat cat mouse", DocumentStatus::Actual, &[1])
        .unwrap();
    assert_eq!(server.index().documents_containing("cat"), cat + 1);
    let tf = server.word_frequencies(10)["cat"];
    assert!((tf - 2.0 / 3.0).abs() < 1e-12);

    assert!(server.remove_document(10));
    assert_eq!(server.document_count(), count);
    assert_eq!(server.index().documents_containing("cat"), cat);
    assert_eq!(server.index().documents_containing("mouse"), 0);
}
