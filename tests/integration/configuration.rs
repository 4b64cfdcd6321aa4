//! Servers built from TOML configuration.

use crate::common::*;
use sieve::{Error, StopWordSource};

#[test]
fn server_from_toml() {
    let config = SearchConfig::from_toml_str(
        r#"
stop_words = ["and", "in", "on"]
accumulator_shards = 8
worker_threads = 2
"#,
    )
    .unwrap();
    let server = pet_server(config);

    assert_eq!(server.accumulator_shards(), 8);
    assert_eq!(server.worker_threads(), Some(2));
    assert_eq!(server.index().stop_word_count(), 3);
    assert_eq!(ids(&server.find_top_documents("fluffy groomed cat").unwrap()), vec![1, 2, 0]);
}

#[test]
fn stop_words_as_text() {
    let config = SearchConfig::from_toml_str(r#"stop_words = "white fluffy""#).unwrap();
    assert_eq!(config.stop_words, StopWordSource::Text("white fluffy".to_string()));

    let mut server = SearchServer::new(config).unwrap();
    server
        .add_document(0, "white cat fluffy tail", DocumentStatus::Actual, &[1])
        .unwrap();
    assert_eq!(server.word_frequencies(0).len(), 2);
}

#[test]
fn invalid_configs_rejected() {
    assert!(matches!(
        SearchConfig::from_toml_str("worker_threads = 0"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("accumulator_shards = -1"),
        Err(Error::Config(_))
    ));
    assert!(SearchServer::new(SearchConfig::default().with_stop_words(["bad\u{7}"]))
        .unwrap_err()
        .is_invalid_argument());
}
