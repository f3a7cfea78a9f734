//! Core types for TTFT Bench.
//!
//! This crate holds the data model shared by every other crate in the
//! workspace: the per-invocation [`RunRecord`], the per-group aggregate
//! statistics, and the benchmark configuration.
//!
//! # Modules
//!
//! - [`record`] - The canonical `RunRecord` struct and its outcome type
//! - [`stats`] - Pure aggregation over collected records
//! - [`config`] - The explicit configuration surface for a benchmark run

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod record;
pub mod stats;

pub use config::{BenchConfig, PromptSet};
pub use record::{BackendKind, RunOutcome, RunRecord};
pub use stats::{group_stats, GroupStats};
