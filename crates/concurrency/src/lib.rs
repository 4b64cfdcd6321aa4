//! Concurrency layer for sieve
//!
//! This crate provides the lock-sharded accumulator used by parallel
//! ranking:
//! - ConcurrentAccumulator: N independently locked shards keyed by integer
//! - Access: scoped guard over one accumulator cell
//! - ShardKey: key-to-shard routing
//!
//! The search index itself carries no internal lock; only the transient
//! per-query accumulator is synchronized.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;

pub use accumulator::{Access, ConcurrentAccumulator, ShardKey};
