//! Search server configuration
//!
//! Construction-time options for [`SearchServer`](crate::SearchServer).
//! Can be built in code or parsed from TOML.
//!
//! # Example
//!
//! ```toml
//! # Either a list of words or one whitespace-delimited string
//! stop_words = ["and", "in", "on"]
//!
//! # Lock shards used by parallel ranking (default: 16)
//! accumulator_shards = 32
//!
//! # Dedicated worker pool size for parallel operations.
//! # Omit to use rayon's global pool.
//! worker_threads = 4
//! ```

use serde::{Deserialize, Serialize};
use sieve_core::{Error, Result, DEFAULT_ACCUMULATOR_SHARDS};

/// Where stop words come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopWordSource {
    /// Explicit list of words
    List(Vec<String>),
    /// Whitespace-delimited text
    Text(String),
}

impl Default for StopWordSource {
    fn default() -> Self {
        StopWordSource::List(Vec::new())
    }
}

/// Configuration for a search server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Words excluded from indexing, querying and matching
    #[serde(default)]
    pub stop_words: StopWordSource,

    /// Shard count for the parallel relevance accumulator
    #[serde(default = "default_accumulator_shards")]
    pub accumulator_shards: usize,

    /// Size of a dedicated worker pool; `None` uses rayon's global pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_threads: Option<usize>,
}

fn default_accumulator_shards() -> usize {
    DEFAULT_ACCUMULATOR_SHARDS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWordSource::default(),
            accumulator_shards: default_accumulator_shards(),
            worker_threads: None,
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML for this struct, or if
    /// `accumulator_shards` or `worker_threads` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SearchConfig =
            toml::from_str(text).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check option ranges
    pub fn validate(&self) -> Result<()> {
        if self.accumulator_shards == 0 {
            return Err(Error::config("accumulator_shards must be at least 1"));
        }
        if self.worker_threads == Some(0) {
            return Err(Error::config("worker_threads must be at least 1"));
        }
        Ok(())
    }

    /// Builder: use the given stop-word list
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = StopWordSource::List(words.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: use whitespace-delimited stop-word text
    pub fn with_stop_words_text(mut self, text: impl Into<String>) -> Self {
        self.stop_words = StopWordSource::Text(text.into());
        self
    }

    /// Builder: set the accumulator shard count
    pub fn with_accumulator_shards(mut self, shards: usize) -> Self {
        self.accumulator_shards = shards;
        self
    }

    /// Builder: use a dedicated worker pool of `threads` threads
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }
}
