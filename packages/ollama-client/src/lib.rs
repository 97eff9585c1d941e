//! Pure Ollama REST API client
//!
//! A clean, minimal client for a locally running Ollama server with no
//! domain-specific logic. Supports non-streaming text generation and
//! listing the locally available models.
//!
//! # Example
//!
//! ```rust,ignore
//! use ollama_client::{OllamaClient, GenerateRequest, GenerateOptions};
//!
//! let client = OllamaClient::new();
//!
//! let response = client
//!     .generate(
//!         GenerateRequest::new("llama3.2", "Why is the sky blue?")
//!             .with_options(GenerateOptions::new().temperature(0.3)),
//!     )
//!     .await?;
//!
//! println!("{}", response.response);
//! ```

pub mod error;
pub mod types;

pub use error::{OllamaError, Result};
pub use types::{GenerateOptions, GenerateRequest, GenerateResponse, ModelInfo};

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default base URL for a local Ollama server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Pure Ollama API client.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: Client,
    base_url: String,
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaClient {
    /// Create a client pointed at the default local server.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        let base_url: String = url.into();
        Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from the `OLLAMA_URL` environment variable, falling back to
    /// the default local server when unset.
    pub fn from_env() -> Self {
        match std::env::var("OLLAMA_URL") {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a completion for a prompt.
    ///
    /// Blocks until the full completion is available (`stream: false`).
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            "Sending generate request"
        );

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| OllamaError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies look like {"error": "model 'x' not found"}
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(OllamaError::Api(format!("HTTP {}: {}", status, detail)));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Parse(format!("Invalid generate response: {}", e)))?;

        debug!(
            model = %generated.model,
            response_len = generated.response.len(),
            eval_count = ?generated.eval_count,
            "Generate request completed"
        );

        Ok(generated)
    }

    /// List models available on the server.
    ///
    /// Doubles as a reachability probe: a `Network` error here means the
    /// server is not running.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let response = self
            .http_client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map_err(|e| OllamaError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::Api(format!("HTTP {}", status)));
        }

        let tags: types::TagsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Parse(format!("Invalid tags response: {}", e)))?;

        Ok(tags.models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OllamaClient::with_base_url("http://example.com:11434/");
        assert_eq!(client.base_url(), "http://example.com:11434");
    }

    #[test]
    fn test_default_base_url() {
        let client = OllamaClient::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Nothing listens on this port.
        let client = OllamaClient::with_base_url("http://127.0.0.1:59999");
        let err = client
            .generate(GenerateRequest::new("llama3.2", "hello"))
            .await
            .unwrap_err();
        assert!(err.is_unreachable(), "expected Network error, got {err:?}");
    }
}
