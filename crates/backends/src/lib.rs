// Copyright 2025 TTFT Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Inference backend adapters for TTFT Bench.
//!
//! Every backend — a locally invoked model runner or a remote HTTP
//! inference server — is consumed through the same narrow contract: a
//! prompt and a token budget go in, generated text and an elapsed-time
//! measurement (or an error) come out. The orchestrator neither knows nor
//! cares how the text was produced.
//!
//! # Example
//!
//! ```ignore
//! use ttft_bench_backends::{RemoteBackend, TextGenBackend};
//!
//! let backend = RemoteBackend::new("http://localhost:8000", None);
//! let generation = backend.infer("Explain GGUF in one sentence.", 10).await?;
//! println!("{} in {:?}", generation.text, generation.latency);
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use ttft_bench_core::BackendKind;

pub mod local;
pub mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

/// Errors that can occur during a backend invocation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The local model runner could not be started.
    #[error("failed to launch model runner: {0}")]
    Launch(String),

    /// The local model runner exited unsuccessfully.
    #[error("model runner failed ({status}): {detail}")]
    Runner {
        /// Exit status of the runner process.
        status: std::process::ExitStatus,
        /// Excerpt of the runner's stderr.
        detail: String,
    },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned HTTP {0}")]
    Http(u16),

    /// The response body was not in the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Text produced by a backend together with its latency measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// Generated text, surrounding whitespace trimmed.
    pub text: String,
    /// Wall-clock time from dispatch to the full response being available.
    /// A proxy for time-to-first-token while no streaming integration exists.
    pub latency: Duration,
}

/// Uniform contract every inference backend implements.
#[async_trait]
pub trait TextGenBackend: Send + Sync {
    /// Which backend this is, for records and logs.
    fn kind(&self) -> BackendKind;

    /// Generate up to `max_new_tokens` tokens for `prompt` and measure the
    /// elapsed wall-clock time.
    async fn infer(&self, prompt: &str, max_new_tokens: u32) -> Result<Generation>;
}
