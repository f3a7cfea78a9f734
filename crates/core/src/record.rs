//! Benchmark result types.
//!
//! A [`RunRecord`] is the atomic unit of measurement output: one prompt, one
//! backend, one latency-or-failure outcome. Records are created by the run
//! orchestrator immediately after each backend invocation returns, appended
//! to an ordered list, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum number of characters kept from the generated text (or failure
/// description) in a record's output preview.
pub const PREVIEW_CHARS: usize = 50;

/// Reserved latency value marking a failed invocation in flat exports.
///
/// In-memory records carry an explicit [`RunOutcome`] instead; this value
/// only appears at the CSV boundary.
pub const FAILURE_SENTINEL: f64 = -1.0;

/// Which inference backend served an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Locally invoked model runner.
    Local,
    /// Remote HTTP inference server.
    Remote,
}

impl BackendKind {
    /// Lowercase identifier used in logs and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Remote => "remote",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single backend invocation.
///
/// A discriminated type rather than an overloaded numeric value, so a
/// genuine near-zero latency can never be confused with a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The backend produced text.
    Completed {
        /// Wall-clock latency of the invocation.
        latency: Duration,
        /// Generated text truncated to [`PREVIEW_CHARS`] characters.
        preview: String,
    },
    /// The backend reported an error.
    Failed {
        /// Description of what went wrong.
        reason: String,
    },
}

/// One measurement: a prompt sent to a backend and what came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Name of the prompt set this prompt belongs to.
    pub prompt_set: String,
    /// Zero-based position of the prompt within its set.
    pub prompt_index: usize,
    /// The full prompt text sent to the backend.
    pub prompt_text: String,
    /// Backend that served the invocation.
    pub backend: BackendKind,
    /// What the invocation produced.
    pub outcome: RunOutcome,
}

impl RunRecord {
    /// Create a record for a successful invocation.
    pub fn completed(
        prompt_set: impl Into<String>,
        prompt_index: usize,
        prompt_text: impl Into<String>,
        backend: BackendKind,
        text: &str,
        latency: Duration,
    ) -> Self {
        Self {
            prompt_set: prompt_set.into(),
            prompt_index,
            prompt_text: prompt_text.into(),
            backend,
            outcome: RunOutcome::Completed {
                latency,
                preview: truncate_chars(text, PREVIEW_CHARS),
            },
        }
    }

    /// Create a record for a failed invocation.
    pub fn failed(
        prompt_set: impl Into<String>,
        prompt_index: usize,
        prompt_text: impl Into<String>,
        backend: BackendKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            prompt_set: prompt_set.into(),
            prompt_index,
            prompt_text: prompt_text.into(),
            backend,
            outcome: RunOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Whether the invocation completed.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { .. })
    }

    /// Measured latency, if the invocation completed.
    pub fn latency(&self) -> Option<Duration> {
        match &self.outcome {
            RunOutcome::Completed { latency, .. } => Some(*latency),
            RunOutcome::Failed { .. } => None,
        }
    }

    /// Latency in seconds, or [`FAILURE_SENTINEL`] for failed invocations.
    pub fn latency_seconds(&self) -> f64 {
        match &self.outcome {
            RunOutcome::Completed { latency, .. } => latency.as_secs_f64(),
            RunOutcome::Failed { .. } => FAILURE_SENTINEL,
        }
    }

    /// Truncated generated text, or an `ERROR:` marker for failures.
    pub fn output_preview(&self) -> String {
        match &self.outcome {
            RunOutcome::Completed { preview, .. } => preview.clone(),
            RunOutcome::Failed { reason } => {
                truncate_chars(&format!("ERROR: {reason}"), PREVIEW_CHARS)
            }
        }
    }
}

/// Truncate a string to at most `cap` characters, respecting char boundaries.
fn truncate_chars(s: &str, cap: usize) -> String {
    s.chars().take(cap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_record_has_latency_and_preview() {
        let record = RunRecord::completed(
            "short",
            0,
            "Hi",
            BackendKind::Local,
            "Hello there",
            Duration::from_millis(100),
        );
        assert!(record.is_success());
        assert_eq!(record.latency(), Some(Duration::from_millis(100)));
        assert_eq!(record.latency_seconds(), 0.1);
        assert_eq!(record.output_preview(), "Hello there");
    }

    #[test]
    fn failed_record_uses_sentinel_and_error_marker() {
        let record = RunRecord::failed("short", 1, "Ping", BackendKind::Remote, "HTTP 500");
        assert!(!record.is_success());
        assert_eq!(record.latency(), None);
        assert_eq!(record.latency_seconds(), FAILURE_SENTINEL);
        assert_eq!(record.output_preview(), "ERROR: HTTP 500");
    }

    #[test]
    fn preview_is_capped_at_fifty_chars() {
        let long = "x".repeat(200);
        let record = RunRecord::completed(
            "long",
            0,
            "prompt",
            BackendKind::Local,
            &long,
            Duration::from_secs(1),
        );
        assert_eq!(record.output_preview().chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn preview_truncation_respects_multibyte_boundaries() {
        let text = "é".repeat(60);
        let record = RunRecord::completed(
            "short",
            0,
            "prompt",
            BackendKind::Remote,
            &text,
            Duration::from_secs(1),
        );
        let preview = record.output_preview();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS);
        assert!(preview.chars().all(|c| c == 'é'));
    }

    #[test]
    fn failure_marker_is_capped_too() {
        let record = RunRecord::failed(
            "short",
            0,
            "prompt",
            BackendKind::Remote,
            "a".repeat(200),
        );
        assert_eq!(record.output_preview().chars().count(), PREVIEW_CHARS);
        assert!(record.output_preview().starts_with("ERROR: "));
    }

    #[test]
    fn backend_kind_display_and_ordering() {
        assert_eq!(BackendKind::Local.to_string(), "local");
        assert_eq!(BackendKind::Remote.to_string(), "remote");
        assert!(BackendKind::Local < BackendKind::Remote);
    }
}
