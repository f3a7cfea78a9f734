//! Run orchestration.
//!
//! The orchestrator walks every prompt of every configured prompt set and
//! invokes each backend in turn, wrapping every invocation in failure
//! isolation: a backend error becomes a failed [`RunRecord`], never a
//! propagated error. One failed prompt/backend must never derail the rest
//! of the benchmark.

use ttft_bench_backends::TextGenBackend;
use ttft_bench_core::{BenchConfig, RunRecord};

use crate::prompts::load_prompts;

/// Drives the configured backends over the configured prompt sets.
pub struct Orchestrator {
    config: BenchConfig,
    backends: Vec<Box<dyn TextGenBackend>>,
}

impl Orchestrator {
    /// Create an orchestrator.
    ///
    /// `backends` are invoked in list order for every prompt; callers that
    /// want the canonical local-then-remote sequencing pass them in that
    /// order.
    pub fn new(config: BenchConfig, backends: Vec<Box<dyn TextGenBackend>>) -> Self {
        Self { config, backends }
    }

    /// Configuration this orchestrator runs with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the benchmark and collect one record per invocation.
    ///
    /// Prompt sets are processed in declaration order; a missing or empty
    /// set is skipped with a diagnostic. Records preserve strict
    /// (set, prompt index, backend order) sequencing.
    pub async fn run(&self) -> Vec<RunRecord> {
        let mut records = Vec::new();

        for set in &self.config.prompt_sets {
            let prompts = load_prompts(&set.path);
            if prompts.is_empty() {
                tracing::warn!(
                    set = %set.name,
                    path = %set.path.display(),
                    "no prompts loaded, skipping set"
                );
                continue;
            }
            tracing::info!(set = %set.name, prompts = prompts.len(), "benchmarking prompt set");

            for (index, prompt) in prompts.iter().enumerate() {
                for backend in &self.backends {
                    let kind = backend.kind();
                    match backend.infer(prompt, self.config.max_new_tokens).await {
                        Ok(generation) => {
                            tracing::info!(
                                set = %set.name,
                                index,
                                backend = %kind,
                                latency_secs = generation.latency.as_secs_f64(),
                                "invocation completed"
                            );
                            records.push(RunRecord::completed(
                                set.name.as_str(),
                                index,
                                prompt.as_str(),
                                kind,
                                &generation.text,
                                generation.latency,
                            ));
                        }
                        Err(e) => {
                            tracing::warn!(
                                set = %set.name,
                                index,
                                backend = %kind,
                                error = %e,
                                "invocation failed"
                            );
                            records.push(RunRecord::failed(
                                set.name.as_str(),
                                index,
                                prompt.as_str(),
                                kind,
                                e.to_string(),
                            ));
                        }
                    }
                }
            }
        }

        records
    }
}
