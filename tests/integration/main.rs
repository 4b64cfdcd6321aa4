//! Integration Tests
//!
//! End-to-end tests through the `sieve` facade, organized by dimension:
//! - Scenarios: worked ranking examples and edge cases
//! - Modes: sequential vs parallel strategies, dedicated vs global pool
//! - Concurrency: many readers sharing one server
//! - Configuration: servers built from TOML
//! - Workflows: request queue and batch helpers over a shared server

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod configuration;
mod modes;
mod scenarios;
mod workflows;
