//! Ollama API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Generate
// =============================================================================

/// Text generation request for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model to use (e.g., "deepseek-r1:1.5b", "llama3.2")
    pub model: String,

    /// The prompt to complete
    pub prompt: String,

    /// Whether to stream the response token by token.
    ///
    /// Always `false` here: the client returns the full completion in
    /// one response body.
    pub stream: bool,

    /// Sampling options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

impl GenerateRequest {
    /// Create a new generation request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options: None,
        }
    }

    /// Set sampling options.
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Sampling options for generation.
///
/// Unset fields fall back to the model's own defaults server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateOptions {
    /// Sampling temperature (0.0 = greedy, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-k sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Nucleus sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Context window size in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u32>,
}

impl GenerateOptions {
    /// Create empty options (all model defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set top-k.
    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set top-p.
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set context window size.
    pub fn num_ctx(mut self, num_ctx: u32) -> Self {
        self.num_ctx = Some(num_ctx);
        self
    }
}

/// Generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Model that produced the completion
    pub model: String,

    /// The generated text
    pub response: String,

    /// Whether generation ran to completion
    pub done: bool,

    /// Tokens in the prompt (if reported)
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,

    /// Tokens in the completion (if reported)
    #[serde(default)]
    pub eval_count: Option<u64>,
}

/// A locally available model, from `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// Model name with tag (e.g., "llama3.2:latest")
    pub name: String,

    /// Size on disk in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

/// Raw tags response from the API (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    pub models: Vec<ModelInfo>,
}
