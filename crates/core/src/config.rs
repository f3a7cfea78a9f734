//! Benchmark configuration.
//!
//! All externally supplied constants live in one explicit [`BenchConfig`]
//! passed into the orchestrator, rather than ambient globals, so multiple
//! configurations can coexist in tests.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named prompt set backed by a newline-delimited text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSet {
    /// Set name used in records, the summary table, and exports.
    pub name: String,
    /// Path to the prompt file, one prompt per line.
    pub path: PathBuf,
}

impl PromptSet {
    /// Create a new prompt set source.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Configuration for one benchmark run.
///
/// `prompt_sets` is ordered: sets are benchmarked in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Executable that runs the local model (llama.cpp CLI convention).
    pub local_command: PathBuf,
    /// Model identifier or weights path handed to the local runner.
    pub local_model: String,
    /// Base URL of the remote inference server.
    pub remote_base_url: String,
    /// Optional model alias for servers that host multiple models.
    pub remote_model_alias: Option<String>,
    /// Token budget requested from both backends per prompt. Kept small:
    /// the measured latency approximates time to first token.
    pub max_new_tokens: u32,
    /// Named prompt sets, benchmarked in order.
    pub prompt_sets: Vec<PromptSet>,
    /// Filename prefix for the CSV export.
    pub export_prefix: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            local_command: PathBuf::from("llama-cli"),
            local_model: "models/gemma-2-9b-it.Q4_K_M.gguf".to_string(),
            remote_base_url: "http://localhost:8000".to_string(),
            remote_model_alias: Some("gemma-2-9b-it.Q4_K_M.gguf".to_string()),
            max_new_tokens: 10,
            prompt_sets: vec![
                PromptSet::new("short", "data/short_prompts.txt"),
                PromptSet::new("long", "data/long_prompts.txt"),
            ],
            export_prefix: "benchmark_results".to_string(),
        }
    }
}
