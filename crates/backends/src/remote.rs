// Copyright 2025 TTFT Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Remote HTTP inference backend.
//!
//! Issues a single non-streaming `POST {base_url}/v1/completions` per
//! invocation, the OpenAI-compatible endpoint served by llama.cpp and
//! vLLM. The measured latency covers dispatch to full response body
//! received; with no token streaming in play that round trip is the
//! closest available stand-in for time-to-first-token.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use ttft_bench_core::BackendKind;

use crate::{BackendError, Generation, Result, TextGenBackend};

/// Adapter for an OpenAI-compatible completions server.
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
    model_alias: Option<String>,
}

/// Request body for the completions endpoint.
#[derive(Debug, Clone, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Response body of the completions endpoint. Servers differ in what they
/// include; everything beyond `choices[0].text` is ignored, and a missing
/// `choices` degrades to empty text rather than an error.
#[derive(Debug, Clone, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

impl RemoteBackend {
    /// Create an adapter for the server at `base_url`.
    ///
    /// A trailing slash on the URL is tolerated. `model_alias` is sent as
    /// the `model` field for servers that host several models; `None`
    /// omits the field entirely.
    pub fn new(base_url: impl Into<String>, model_alias: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            model_alias,
        }
    }

    /// Normalized base URL this adapter targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/completions", self.base_url)
    }

    fn request_body<'a>(&'a self, prompt: &'a str, max_new_tokens: u32) -> CompletionRequest<'a> {
        CompletionRequest {
            prompt,
            n_predict: max_new_tokens,
            model: self.model_alias.as_deref(),
        }
    }
}

#[async_trait]
impl TextGenBackend for RemoteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    async fn infer(&self, prompt: &str, max_new_tokens: u32) -> Result<Generation> {
        let endpoint = self.endpoint();
        let body = self.request_body(prompt, max_new_tokens);
        tracing::debug!(%endpoint, n_predict = max_new_tokens, "dispatching completion request");

        let started = Instant::now();
        let response = self.client.post(&endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Http(status.as_u16()));
        }
        let raw = response.text().await?;
        let latency = started.elapsed();

        let parsed: CompletionResponse =
            serde_json::from_str(&raw).map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
        let text = parsed
            .choices
            .first()
            .map(|choice| choice.text.trim().to_string())
            .unwrap_or_default();

        Ok(Generation { text, latency })
    }
}
