//! Stop-word set
//!
//! Stop words are excluded from indexing, querying and matching. They are
//! interned in the shared [`WordSet`] like every other word; the set itself
//! only stores handles.

use crate::tokenizer::{is_valid_word, split_into_words};
use crate::word_set::{WordId, WordSet};
use rustc_hash::FxHashSet;
use sieve_core::{Error, Result};

/// Set of stop-word handles
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    ids: FxHashSet<WordId>,
}

impl StopWords {
    /// Create an empty stop-word set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stop-word set from a collection of words
    ///
    /// Empty strings are ignored. Every word is validated before any is
    /// interned, so a rejected set leaves `pool` untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any word contains a control character.
    pub fn from_words<I, S>(words: I, pool: &mut WordSet) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        if let Some(bad) = words.iter().find(|w| !is_valid_word(w.as_ref())) {
            return Err(Error::invalid_argument(format!(
                "stop word {:?} contains a control character",
                bad.as_ref()
            )));
        }

        let ids = words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| !w.is_empty())
            .map(|w| pool.intern(w))
            .collect();
        Ok(Self { ids })
    }

    /// Build a stop-word set from whitespace-delimited text
    pub fn from_text(text: &str, pool: &mut WordSet) -> Result<Self> {
        Self::from_words(split_into_words(text), pool)
    }

    /// Whether `word` is a stop word
    pub fn is_stop_word(&self, pool: &WordSet, word: &str) -> bool {
        pool.get(word).is_some_and(|id| self.ids.contains(&id))
    }

    /// Whether the handle belongs to a stop word
    pub fn contains(&self, id: WordId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no stop words
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
