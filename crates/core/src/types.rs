//! Execution strategy selection
//!
//! Every engine operation that has a parallel variant takes an
//! [`ExecutionMode`] instead of exposing a separate method per strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an engine operation is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Run entirely on the calling thread
    #[default]
    Sequential,
    /// Partition the work across the server's worker pool
    Parallel,
}

impl ExecutionMode {
    /// Whether this mode fans work out to worker threads
    pub fn is_parallel(self) -> bool {
        matches!(self, ExecutionMode::Parallel)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => f.write_str("sequential"),
            ExecutionMode::Parallel => f.write_str("parallel"),
        }
    }
}
