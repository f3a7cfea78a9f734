//! Console summary rendering.

use std::collections::BTreeSet;
use std::fmt::Write;
use ttft_bench_core::{group_stats, BackendKind, RunRecord};

const TABLE_WIDTH: usize = 56;

/// Render the benchmark summary table.
///
/// Groups are every observed prompt set (sorted) crossed with every
/// observed backend (sorted): set label, backend label, mean latency over
/// successes to four decimals, and a `successful/total` ratio, with a
/// separator between prompt-set groups. An empty result list renders a
/// notice instead of an empty table. Pure: the input is never mutated and
/// identical inputs render identical strings.
pub fn render_summary(records: &[RunRecord]) -> String {
    let mut output = String::new();

    if records.is_empty() {
        writeln!(output, "No benchmark results to report.").unwrap();
        return output;
    }

    let sets: BTreeSet<&str> = records.iter().map(|r| r.prompt_set.as_str()).collect();
    let backends: BTreeSet<BackendKind> = records.iter().map(|r| r.backend).collect();

    writeln!(output, "{}", "=".repeat(TABLE_WIDTH)).unwrap();
    writeln!(output, "{:^width$}", "Benchmark Summary Report", width = TABLE_WIDTH).unwrap();
    writeln!(output, "{}", "=".repeat(TABLE_WIDTH)).unwrap();
    writeln!(
        output,
        "{:<12} | {:<9} | {:<12} | {:<12}",
        "Prompt Set", "Backend", "Avg TTFT (s)", "Success"
    )
    .unwrap();
    writeln!(output, "{}", "-".repeat(TABLE_WIDTH)).unwrap();

    for (position, set) in sets.iter().enumerate() {
        for backend in &backends {
            let stats = group_stats(records, set, *backend);
            writeln!(
                output,
                "{:<12} | {:<9} | {:<12.4} | {:<12}",
                capitalize(set),
                capitalize(backend.as_str()),
                stats.mean_latency_secs,
                stats.ratio()
            )
            .unwrap();
        }
        if position + 1 < sets.len() {
            writeln!(output, "{}", "-".repeat(TABLE_WIDTH)).unwrap();
        }
    }

    writeln!(output, "{}", "=".repeat(TABLE_WIDTH)).unwrap();
    writeln!(output, "(TTFT averages cover successful runs only)").unwrap();

    output
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn completed(set: &str, idx: usize, backend: BackendKind, millis: u64) -> RunRecord {
        RunRecord::completed(
            set,
            idx,
            format!("prompt {idx}"),
            backend,
            "output text",
            Duration::from_millis(millis),
        )
    }

    #[test]
    fn empty_results_render_a_notice() {
        let rendered = render_summary(&[]);
        assert_eq!(rendered, "No benchmark results to report.\n");
    }

    #[test]
    fn table_contains_a_row_per_group() {
        let records = vec![
            completed("short", 0, BackendKind::Local, 100),
            completed("short", 0, BackendKind::Remote, 200),
            completed("long", 0, BackendKind::Local, 300),
            completed("long", 0, BackendKind::Remote, 400),
        ];
        let rendered = render_summary(&records);

        assert!(rendered.contains("Benchmark Summary Report"));
        assert!(rendered.contains("Short"));
        assert!(rendered.contains("Long"));
        assert!(rendered.contains("Local"));
        assert!(rendered.contains("Remote"));
        // Four decimal places on the means.
        assert!(rendered.contains("0.1000"));
        assert!(rendered.contains("0.4000"));
        assert!(rendered.contains("1/1"));
    }

    #[test]
    fn failed_only_group_shows_zero_mean_and_ratio() {
        let records = vec![RunRecord::failed(
            "short",
            0,
            "Hi",
            BackendKind::Remote,
            "connection refused",
        )];
        let rendered = render_summary(&records);
        assert!(rendered.contains("0.0000"));
        assert!(rendered.contains("0/1"));
    }

    #[test]
    fn unobserved_sets_are_not_listed() {
        let records = vec![completed("long", 0, BackendKind::Local, 100)];
        let rendered = render_summary(&records);
        assert!(!rendered.contains("Short"));
    }

    #[test]
    fn rendering_is_idempotent_and_does_not_mutate_input() {
        let records = vec![
            completed("short", 0, BackendKind::Local, 100),
            completed("short", 1, BackendKind::Local, 200),
        ];
        let snapshot = records.clone();
        let first = render_summary(&records);
        let second = render_summary(&records);
        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn separator_appears_between_prompt_set_groups() {
        let records = vec![
            completed("a", 0, BackendKind::Local, 100),
            completed("b", 0, BackendKind::Local, 100),
        ];
        let rendered = render_summary(&records);
        let separators = rendered
            .lines()
            .filter(|line| line.chars().all(|c| c == '-') && !line.is_empty())
            .count();
        // One under the header, one between the two groups.
        assert_eq!(separators, 2);
    }
}
