//! Many readers sharing one server.

use crate::common::*;
use parking_lot::Mutex;
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 8;
const QUERY: &str = "alpha charlie -hotel";

#[test]
fn concurrent_searches_see_same_results() {
    let server = synthetic_server(500, SearchConfig::default().with_worker_threads(4));
    let expected = server.find_top_documents(QUERY).unwrap();
    let barrier = Barrier::new(THREADS);
    let mismatches = Mutex::new(Vec::new());

    thread::scope(|s| {
        for t in 0..THREADS {
            let server = &server;
            let barrier = &barrier;
            let expected = &expected;
            let mismatches = &mismatches;
            s.spawn(move || {
                barrier.wait();
                for i in 0..50 {
                    let mode = if (t + i) % 2 == 0 {
                        ExecutionMode::Sequential
                    } else {
                        ExecutionMode::Parallel
                    };
                    let results = server
                        .find_top_documents_with(mode, QUERY, &DocumentStatus::Actual)
                        .unwrap();
                    if id_ratings(&results) != id_ratings(expected) {
                        mismatches.lock().push((t, i));
                    }
                }
            });
        }
    });

    let mismatches = mismatches.into_inner();
    assert!(mismatches.is_empty(), "mismatched runs: {:?}", mismatches);
}

#[test]
fn concurrent_matching() {
    let server = pet_server(SearchConfig::default());
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for _ in 0..THREADS {
            let server = &server;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    let matched = server
                        .match_document_with(ExecutionMode::Parallel, "fluffy cat -collar", 1)
                        .unwrap()
                        .unwrap();
                    assert_eq!(matched.words, vec!["cat", "fluffy"]);
                }
            });
        }
    });
}
