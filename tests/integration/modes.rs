//! Sequential vs parallel strategies across pool and shard settings.

use crate::common::*;
use proptest::prelude::*;

fn configs() -> Vec<SearchConfig> {
    vec![
        SearchConfig::default(),
        SearchConfig::default().with_accumulator_shards(1),
        SearchConfig::default()
            .with_accumulator_shards(3)
            .with_worker_threads(2),
        SearchConfig::default()
            .with_accumulator_shards(64)
            .with_worker_threads(1),
    ]
}

#[test]
fn modes_agree_across_configs() {
    let queries = [
        "alpha bravo",
        "charlie -delta",
        "echo foxtrot golf hotel",
        "india juliet -alpha -bravo",
        "-echo",
    ];

    for config in configs() {
        let server = synthetic_server(300, config.clone());
        for query in queries {
            for status in DocumentStatus::ALL {
                let seq = server
                    .find_top_documents_with(ExecutionMode::Sequential, query, &status)
                    .unwrap();
                let par = server
                    .find_top_documents_with(ExecutionMode::Parallel, query, &status)
                    .unwrap();
                assert_eq!(
                    id_ratings(&seq),
                    id_ratings(&par),
                    "query {:?} status {} config {:?}",
                    query,
                    status,
                    config
                );
            }
        }
    }
}

#[test]
fn match_modes_agree() {
    let server = synthetic_server(100, SearchConfig::default().with_worker_threads(2));
    for id in server.document_ids() {
        let seq = server
            .match_document_with(ExecutionMode::Sequential, "alpha echo -golf", id)
            .unwrap();
        let par = server
            .match_document_with(ExecutionMode::Parallel, "alpha echo -golf", id)
            .unwrap();
        assert_eq!(seq, par, "document {}", id);
    }
}

#[test]
fn remove_modes_agree() {
    let mut seq = synthetic_server(120, SearchConfig::default());
    let mut par = synthetic_server(120, SearchConfig::default().with_worker_threads(3));

    for id in (0..120).step_by(7) {
        assert!(seq.remove_document_with(ExecutionMode::Sequential, id));
        assert!(par.remove_document_with(ExecutionMode::Parallel, id));
    }

    let seq_ids: Vec<_> = seq.document_ids().collect();
    let par_ids: Vec<_> = par.document_ids().collect();
    assert_eq!(seq_ids, par_ids);
    assert_eq!(seq.index().indexed_word_count(), par.index().indexed_word_count());
    for word in ["alpha", "delta", "juliet"] {
        assert_eq!(seq.index().postings(word), par.index().postings(word));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_matches_sequential_for_random_rating_filters(
        threshold in -6i32..6,
        shards in 1usize..32,
    ) {
        let server = synthetic_server(150, SearchConfig::default().with_accumulator_shards(shards));
        let filter = move |_: DocumentId, _: DocumentStatus, rating: i32| rating >= threshold;

        let seq = server
            .find_top_documents_with(ExecutionMode::Sequential, "bravo hotel -india", &filter)
            .unwrap();
        let par = server
            .find_top_documents_with(ExecutionMode::Parallel, "bravo hotel -india", &filter)
            .unwrap();
        prop_assert_eq!(id_ratings(&seq), id_ratings(&par));
        prop_assert!(seq.iter().all(|d| d.rating >= threshold));
    }
}
