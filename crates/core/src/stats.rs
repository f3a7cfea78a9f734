//! Pure aggregation over collected run records.

use crate::record::{BackendKind, RunRecord};

/// Aggregate statistics for one (prompt set, backend) group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    /// Prompt set the group was filtered on.
    pub prompt_set: String,
    /// Backend the group was filtered on.
    pub backend: BackendKind,
    /// Arithmetic mean latency over successful runs, in seconds.
    ///
    /// Defined as `0.0` when there are no successful runs, so "no data" is
    /// never reported as a division-by-zero artifact.
    pub mean_latency_secs: f64,
    /// Number of successful runs in the group.
    pub successful: usize,
    /// Total number of runs in the group.
    pub total: usize,
}

impl GroupStats {
    /// Success ratio as a `successful/total` string.
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.successful, self.total)
    }
}

/// Compute statistics for records matching both `prompt_set` and `backend`.
///
/// Pure and order-independent: the same multiset of records always yields
/// the same result. The mean covers successful runs only.
pub fn group_stats(records: &[RunRecord], prompt_set: &str, backend: BackendKind) -> GroupStats {
    let mut total = 0usize;
    let mut successful = 0usize;
    let mut latency_sum = 0.0f64;

    for record in records {
        if record.prompt_set != prompt_set || record.backend != backend {
            continue;
        }
        total += 1;
        if let Some(latency) = record.latency() {
            successful += 1;
            latency_sum += latency.as_secs_f64();
        }
    }

    let mean_latency_secs = if successful > 0 {
        latency_sum / successful as f64
    } else {
        0.0
    };

    GroupStats {
        prompt_set: prompt_set.to_string(),
        backend,
        mean_latency_secs,
        successful,
        total,
    }
}
