//! Report emission for TTFT Bench.
//!
//! Two independent outputs, both pure functions of the collected records:
//! a human-readable console summary grouped by prompt set and backend, and
//! a timestamped CSV artifact holding every record.
//!
//! # Modules
//!
//! - [`summary`] - Console summary rendering
//! - [`export`] - CSV export and re-import

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod export;
pub mod summary;

pub use export::{export_csv, read_csv, ExportError};
pub use summary::render_summary;
