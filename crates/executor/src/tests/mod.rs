//! Test modules for the executor crate.


use sieve_core::DocumentStatus;
use sieve_search::SearchServer;

/// Server shared by the executor tests
pub(crate) fn create_test_server() -> SearchServer {
    let mut server = SearchServer::with_stop_words_text("and in at").unwrap();
    let docs = [
        (1, "curly cat curly tail", DocumentStatus::Actual, vec![7, 2, 7]),
        (2, "curly dog and fancy collar", DocumentStatus::Actual, vec![1, 2, 3]),
        (3, "big cat fancy collar ", DocumentStatus::Actual, vec![1, 2, 8]),
        (4, "big dog sparrow Eugene", DocumentStatus::Actual, vec![1, 3, 2]),
        (5, "big dog sparrow Vasiliy", DocumentStatus::Actual, vec![1, 1, 1]),
        (6, "curly sparrow at home", DocumentStatus::Banned, vec![4]),
    ];
    for (id, text, status, ratings) in docs {
        server.add_document(id, text, status, &ratings).unwrap();
    }
    server
}
