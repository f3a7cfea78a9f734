//! CSV export and re-import of run records.
//!
//! Every run writes one flat file named `<prefix>_<YYYYMMDD_HHMMSS>.csv`
//! into the working directory, so repeated runs never overwrite each
//! other. Failed invocations are flattened to the `-1.0` latency sentinel
//! and an `ERROR:` preview; [`read_csv`] reverses that mapping.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use ttft_bench_core::{BackendKind, RunRecord};

/// Errors that can occur while exporting or importing results.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization or file error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A row named a backend this build does not know.
    #[error("unknown backend label: {0}")]
    UnknownBackend(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// One CSV row; column order is the field order here.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    prompt_set: String,
    prompt_index: usize,
    prompt_text: String,
    backend: String,
    output_preview: String,
    latency_seconds: f64,
}

impl From<&RunRecord> for CsvRow {
    fn from(record: &RunRecord) -> Self {
        Self {
            prompt_set: record.prompt_set.clone(),
            prompt_index: record.prompt_index,
            prompt_text: record.prompt_text.clone(),
            backend: record.backend.to_string(),
            output_preview: record.output_preview(),
            latency_seconds: record.latency_seconds(),
        }
    }
}

fn row_to_record(row: CsvRow) -> Result<RunRecord> {
    let backend = match row.backend.as_str() {
        "local" => BackendKind::Local,
        "remote" => BackendKind::Remote,
        other => return Err(ExportError::UnknownBackend(other.to_string())),
    };

    let record = if row.latency_seconds < 0.0 {
        let reason = row
            .output_preview
            .strip_prefix("ERROR: ")
            .unwrap_or(&row.output_preview)
            .to_string();
        RunRecord::failed(row.prompt_set, row.prompt_index, row.prompt_text, backend, reason)
    } else {
        RunRecord::completed(
            row.prompt_set,
            row.prompt_index,
            row.prompt_text,
            backend,
            &row.output_preview,
            Duration::from_secs_f64(row.latency_seconds),
        )
    };
    Ok(record)
}

/// Export records to a timestamped CSV in the current working directory.
///
/// Returns the path of the written file, or `None` (and no file) when
/// there is nothing to export.
pub fn export_csv(records: &[RunRecord], prefix: &str) -> Result<Option<PathBuf>> {
    export_csv_in(Path::new("."), records, prefix)
}

/// Export records to a timestamped CSV inside `dir`.
pub fn export_csv_in(dir: &Path, records: &[RunRecord], prefix: &str) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        tracing::info!("no results to export, skipping CSV");
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{prefix}_{timestamp}.csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "results exported");
    Ok(Some(path))
}

/// Read records back from a previously exported CSV.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<RunRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(row_to_record(row?)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<RunRecord> {
        vec![
            RunRecord::completed(
                "short",
                0,
                "Hi",
                BackendKind::Local,
                "Hello!",
                Duration::from_millis(125),
            ),
            RunRecord::completed(
                "short",
                0,
                "Hi",
                BackendKind::Remote,
                "Hey there",
                Duration::from_millis(250),
            ),
            RunRecord::failed("short", 1, "Ping", BackendKind::Remote, "server returned HTTP 500"),
        ]
    }

    #[test]
    fn empty_records_skip_file_creation() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_csv_in(dir.path(), &[], "benchmark_results").unwrap();
        assert!(written.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_writes_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let records = sample_records();
        let path = export_csv_in(dir.path(), &records, "benchmark_results")
            .unwrap()
            .unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("benchmark_results_"));
        assert!(name.ends_with(".csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), records.len() + 1);
        assert_eq!(
            lines[0],
            "prompt_set,prompt_index,prompt_text,backend,output_preview,latency_seconds"
        );
        assert!(lines[3].contains("-1"));
        assert!(lines[3].contains("ERROR: server returned HTTP 500"));
    }

    #[test]
    fn export_does_not_mutate_records() {
        let dir = tempfile::tempdir().unwrap();
        let records = sample_records();
        let snapshot = records.clone();
        export_csv_in(dir.path(), &records, "benchmark_results").unwrap();
        assert_eq!(records, snapshot);
    }

    #[test]
    fn exported_file_round_trips_through_read_csv() {
        let dir = tempfile::tempdir().unwrap();
        let records = sample_records();
        let path = export_csv_in(dir.path(), &records, "benchmark_results")
            .unwrap()
            .unwrap();

        let restored = read_csv(&path).unwrap();
        assert_eq!(restored.len(), records.len());
        for (original, restored) in records.iter().zip(&restored) {
            assert_eq!(restored.prompt_set, original.prompt_set);
            assert_eq!(restored.prompt_index, original.prompt_index);
            assert_eq!(restored.prompt_text, original.prompt_text);
            assert_eq!(restored.backend, original.backend);
            assert_eq!(restored.is_success(), original.is_success());
            assert_eq!(restored.output_preview(), original.output_preview());
            assert!((restored.latency_seconds() - original.latency_seconds()).abs() < 1e-9);
        }
    }

    #[test]
    fn unknown_backend_label_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.csv");
        std::fs::write(
            &path,
            "prompt_set,prompt_index,prompt_text,backend,output_preview,latency_seconds\n\
             short,0,Hi,mainframe,Hello,0.5\n",
        )
        .unwrap();

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, ExportError::UnknownBackend(ref label) if label == "mainframe"));
    }

    #[test]
    fn unwritable_directory_reports_an_error() {
        let records = sample_records();
        let result = export_csv_in(Path::new("/nonexistent/dir"), &records, "benchmark_results");
        assert!(result.is_err());
    }
}
