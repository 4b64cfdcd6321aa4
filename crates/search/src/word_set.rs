//! Interned word pool
//!
//! Every distinct word seen by the index (stop words and document words)
//! is stored exactly once here. All other structures hold a [`WordId`]
//! handle instead of a string, so there are no borrows tied to the
//! lifetime of the container.
//!
//! The pool only grows. Words are never evicted, even after the last
//! document containing them is removed.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Stable handle to an interned word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Position of the word in the pool
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only pool of interned words
#[derive(Debug, Default)]
pub struct WordSet {
    /// Text -> handle
    ids: FxHashMap<Arc<str>, WordId>,
    /// Handle -> text, indexed by WordId
    words: Vec<Arc<str>>,
}

impl WordSet {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a word, returning its handle
    ///
    /// Returns the existing handle when the word is already present.
    pub fn intern(&mut self, word: &str) -> WordId {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = WordId(self.words.len() as u32);
        let text: Arc<str> = Arc::from(word);
        self.words.push(Arc::clone(&text));
        self.ids.insert(text, id);
        id
    }

    /// Look up a word without interning it
    pub fn get(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Resolve a handle back to its text
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this pool.
    pub fn resolve(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    /// Whether the word is interned
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Number of interned words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
