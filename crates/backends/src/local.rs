// Copyright 2025 TTFT Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Local model runner backend.
//!
//! Thin wrapper around an external model-runner executable using the
//! llama.cpp CLI argument convention: `-m <model> -p <prompt> -n <tokens>`.
//! The latency measurement brackets the whole process run, so it includes
//! process startup and model load — a coarser proxy than the remote
//! backend's, which talks to an already-warm server.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use ttft_bench_core::BackendKind;

use crate::{BackendError, Generation, Result, TextGenBackend};

/// How much of the runner's stderr is kept in an error.
const STDERR_EXCERPT_CHARS: usize = 200;

/// Adapter for a locally invoked model runner executable.
pub struct LocalBackend {
    command: PathBuf,
    model: String,
}

impl LocalBackend {
    /// Create an adapter that runs `command` with model `model`.
    pub fn new(command: impl Into<PathBuf>, model: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            model: model.into(),
        }
    }

    /// Model identifier handed to the runner.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenBackend for LocalBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    async fn infer(&self, prompt: &str, max_new_tokens: u32) -> Result<Generation> {
        tracing::debug!(command = %self.command.display(), model = %self.model, "running local model");

        let started = Instant::now();
        let output = Command::new(&self.command)
            .arg("-m")
            .arg(&self.model)
            .arg("-p")
            .arg(prompt)
            .arg("-n")
            .arg(max_new_tokens.to_string())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| BackendError::Launch(format!("{}: {e}", self.command.display())))?;
        let latency = started.elapsed();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail: String = stderr.trim().chars().take(STDERR_EXCERPT_CHARS).collect();
            return Err(BackendError::Runner {
                status: output.status,
                detail,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Generation { text, latency })
    }
}
