//! Query parsing
//!
//! A raw query is split on whitespace. Each token is classified on its own:
//! - `-word` is a minus-word (documents containing it are excluded)
//! - a stop word is dropped
//! - anything else is a plus-word (contributes relevance)
//!
//! Words in a [`Query`] borrow from the raw query text.

use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, split_into_words};
use crate::word_set::WordSet;
use sieve_core::{Error, Result};
use std::collections::BTreeSet;

/// Parsed query: deduplicated plus- and minus-words, stop words removed
///
/// A word may appear in both sets when the query contains `word` and
/// `-word`; consumers treat the minus classification as winning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'q> {
    /// Words that contribute relevance
    pub plus_words: BTreeSet<&'q str>,
    /// Words that exclude a document
    pub minus_words: BTreeSet<&'q str>,
}

impl Query<'_> {
    /// Whether the query has no plus-words and no minus-words
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// One classified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueryWord<'q> {
    data: &'q str,
    is_minus: bool,
    is_stop: bool,
}

/// Parser bound to a word pool and its stop words
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'a> {
    pool: &'a WordSet,
    stop_words: &'a StopWords,
}

impl<'a> QueryParser<'a> {
    /// Create a parser that drops the given stop words
    pub fn new(pool: &'a WordSet, stop_words: &'a StopWords) -> Self {
        Self { pool, stop_words }
    }

    /// Parse raw query text
    ///
    /// Empty or whitespace-only text yields an empty query.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any token is malformed: a lone `-`, a
    /// double `--` prefix, a trailing `-`, or a control character.
    pub fn parse<'q>(&self, text: &'q str) -> Result<Query<'q>> {
        let mut query = Query::default();
        for token in split_into_words(text) {
            let word = self.parse_word(token)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.insert(word.data);
            } else {
                query.plus_words.insert(word.data);
            }
        }
        Ok(query)
    }

    fn parse_word<'q>(&self, token: &'q str) -> Result<QueryWord<'q>> {
        let (data, is_minus) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if data.is_empty() {
            return Err(Error::invalid_argument(format!(
                "query word {:?} is empty after '-'",
                token
            )));
        }
        if data.starts_with('-') {
            return Err(Error::invalid_argument(format!(
                "query word {:?} has more than one leading '-'",
                token
            )));
        }
        if data.ends_with('-') {
            return Err(Error::invalid_argument(format!(
                "query word {:?} ends with '-'",
                token
            )));
        }
        if !is_valid_word(data) {
            return Err(Error::invalid_argument(format!(
                "query word {:?} contains a control character",
                token
            )));
        }

        Ok(QueryWord {
            data,
            is_minus,
            is_stop: self.stop_words.is_stop_word(self.pool, data),
        })
    }
}
