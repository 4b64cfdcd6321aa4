//! Request queue and batch helpers over a shared server.

use crate::common::*;
use sieve::{
    add_documents, match_documents, process_queries, process_queries_joined, NewDocument,
    RequestQueue,
};

#[test]
fn load_then_query_in_batches() {
    let mut server = SearchServer::with_stop_words_text("and in on").unwrap();
    let report = add_documents(
        &mut server,
        PET_DOCUMENTS
            .iter()
            .map(|(id, text, status, ratings)| {
                NewDocument::new(*id, *text, *status, ratings.to_vec())
            }),
    );
    assert_eq!(report.added, PET_DOCUMENTS.len());

    let queries = ["fluffy groomed cat", "curly dog", "starling"];
    let batched = process_queries(&server, &queries).unwrap();
    assert_eq!(ids(&batched[0]), vec![1, 2, 0]);
    assert_eq!(ids(&batched[1]), vec![2]);
    assert!(batched[2].is_empty());

    let joined = process_queries_joined(&server, &queries).unwrap();
    assert_eq!(ids(&joined), vec![1, 2, 0, 2]);
}

#[test]
fn request_queue_over_loaded_server() {
    let server = pet_server(SearchConfig::default());
    let mut queue = RequestQueue::new(&server);

    queue.add_find_request("starling").unwrap();
    queue
        .add_find_request_by_status("starling", DocumentStatus::Banned)
        .unwrap();
    queue.add_find_request("cat -white").unwrap();

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.no_result_requests(), 1);
}

#[test]
fn match_every_document() {
    let server = pet_server(SearchConfig::default());
    let matches = match_documents(&server, "cat collar -fluffy").unwrap();

    let summary: Vec<_> = matches
        .iter()
        .map(|(id, m)| (*id, m.words.len(), m.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, 2, DocumentStatus::Actual),
            (1, 0, DocumentStatus::Actual),
            (2, 0, DocumentStatus::Actual),
            (3, 0, DocumentStatus::Banned),
            (4, 1, DocumentStatus::Irrelevant),
            (5, 1, DocumentStatus::Removed),
        ]
    );

    let ids: Vec<_> = (&server).into_iter().collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}
