//! Ollama-backed summarizer.
//!
//! Wraps the sibling `ollama-client` package behind the [`Summarizer`]
//! trait. Sampling leans deterministic so repeated runs over the same
//! sources produce similar reports.

use async_trait::async_trait;
use ollama_client::{GenerateOptions, GenerateRequest, OllamaClient, OllamaError};
use tracing::{debug, warn};

use crate::error::{ResearchError, Result};
use crate::pipeline::prompts::format_report_prompt;
use crate::traits::summarizer::{Summarizer, SummaryInput};

/// Configuration for the Ollama summarizer.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Model name as known to the Ollama server
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Top-k sampling cutoff
    pub top_k: u32,

    /// Nucleus sampling cutoff
    pub top_p: f32,

    /// Context window size in tokens
    pub num_ctx: u32,

    /// Input budget in characters.
    ///
    /// Combined input longer than this is cut before prompting, so the
    /// model never silently loses the tail of the prompt to its context
    /// window. Sized at roughly four characters per token of `num_ctx`.
    pub max_input_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::for_model("deepseek-r1:1.5b")
    }
}

impl SummarizerConfig {
    /// Defaults for a given model.
    pub fn for_model(model: impl Into<String>) -> Self {
        let num_ctx = 2048;
        Self {
            model: model.into(),
            temperature: 0.3,
            top_k: 40,
            top_p: 0.9,
            num_ctx,
            max_input_chars: (num_ctx as usize) * 4,
        }
    }

    /// Set the context window size, resizing the input budget with it.
    pub fn with_num_ctx(mut self, num_ctx: u32) -> Self {
        self.num_ctx = num_ctx;
        self.max_input_chars = (num_ctx as usize) * 4;
        self
    }

    /// Set the input budget directly.
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }
}

/// Summarizer backed by a local Ollama model.
///
/// # Example
///
/// ```rust,ignore
/// use ollama_client::OllamaClient;
/// use research::summarizers::{OllamaSummarizer, SummarizerConfig};
///
/// let summarizer = OllamaSummarizer::new(OllamaClient::new())
///     .with_config(SummarizerConfig::for_model("llama3.2"));
/// ```
pub struct OllamaSummarizer {
    client: OllamaClient,
    config: SummarizerConfig,
}

impl OllamaSummarizer {
    /// Create a summarizer with default configuration.
    pub fn new(client: OllamaClient) -> Self {
        Self {
            client,
            config: SummarizerConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Cut the combined input to the configured budget.
    fn apply_input_budget(&self, combined: String) -> String {
        if combined.len() <= self.config.max_input_chars {
            return combined;
        }

        let mut cut = self.config.max_input_chars;
        while !combined.is_char_boundary(cut) {
            cut -= 1;
        }

        warn!(
            input_len = combined.len(),
            budget = self.config.max_input_chars,
            dropped = combined.len() - cut,
            "Combined input exceeds budget, truncating"
        );

        let mut truncated = combined;
        truncated.truncate(cut);
        truncated
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn summarize(&self, input: SummaryInput, question: Option<&str>) -> Result<String> {
        let combined = self.apply_input_budget(input.combined());
        let prompt = format_report_prompt(question, &combined);

        debug!(
            model = %self.config.model,
            source_count = input.source_count(),
            prompt_len = prompt.len(),
            "Summarization starting"
        );

        let request = GenerateRequest::new(self.config.model.as_str(), prompt).with_options(
            GenerateOptions::new()
                .temperature(self.config.temperature)
                .top_k(self.config.top_k)
                .top_p(self.config.top_p)
                .num_ctx(self.config.num_ctx),
        );

        let response = self.client.generate(request).await.map_err(|e| match e {
            OllamaError::Network(message) => ResearchError::InferenceUnavailable { message },
            other => ResearchError::Inference(Box::new(other)),
        })?;

        Ok(response.response.trim().to_string())
    }
}
