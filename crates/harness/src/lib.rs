//! Benchmark harness for TTFT Bench.
//!
//! Loads prompt sets from disk and drives both inference backends over
//! them, collecting one [`ttft_bench_core::RunRecord`] per invocation.
//! Execution is strictly sequential: backends are invoked one after
//! another so their latency measurements never contend for the same
//! compute or network resources.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod orchestrator;
pub mod prompts;

pub use orchestrator::Orchestrator;
pub use prompts::load_prompts;
