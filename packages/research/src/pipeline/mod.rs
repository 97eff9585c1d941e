//! Research pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Search (question → candidate URLs)
//! - Map stage (per URL: extract text, summarize against the question)
//! - Reduce stage (all per-source summaries → one report)
//!
//! Failure policy: search and per-source extraction failures degrade the
//! input and the run continues; inference failures end the run, since no
//! report can be produced without the model.

pub mod prompts;

pub use prompts::{format_report_prompt, NO_QUESTION_PLACEHOLDER, REPORT_PROMPT};

use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::error::{FetchError, ResearchError, Result};
use crate::traits::{
    extractor::TextExtractor,
    searcher::WebSearcher,
    summarizer::{Summarizer, SummaryInput},
};

/// The research pipeline - main entry point for the library.
///
/// Stateless across runs: each call to [`research`](Self::research)
/// operates on its own local intermediates, so concurrent calls are fully
/// independent.
///
/// # Example
///
/// ```rust,ignore
/// use ollama_client::OllamaClient;
/// use research::{
///     extractors::HttpTextExtractor, searchers::DuckDuckGoSearcher,
///     summarizers::OllamaSummarizer, ResearchPipeline,
/// };
///
/// let pipeline = ResearchPipeline::new(
///     DuckDuckGoSearcher::new(),
///     HttpTextExtractor::new(),
///     OllamaSummarizer::new(OllamaClient::new()),
/// );
///
/// let report = pipeline.research("What is quantum computing?").await?;
/// println!("{report}");
/// ```
pub struct ResearchPipeline<S: WebSearcher, E: TextExtractor, M: Summarizer> {
    searcher: S,
    extractor: E,
    summarizer: M,
    config: PipelineConfig,
}

impl<S: WebSearcher, E: TextExtractor, M: Summarizer> ResearchPipeline<S, E, M> {
    /// Create a new pipeline.
    pub fn new(searcher: S, extractor: E, summarizer: M) -> Self {
        Self {
            searcher,
            extractor,
            summarizer,
            config: PipelineConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get a reference to the summarizer.
    ///
    /// Mostly useful in tests, where the summarizer doubles as the call
    /// log for the run.
    pub fn summarizer(&self) -> &M {
        &self.summarizer
    }

    /// Research a question and return a Markdown report.
    ///
    /// Runs search → map → reduce. Every source returned by the search
    /// step produces exactly one per-source summary, in search order, even
    /// when its extraction fails; the reduce step then writes the report
    /// over all of them.
    pub async fn research(&self, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ResearchError::InvalidQuestion {
                reason: "question must not be blank".to_string(),
            });
        }

        info!(question = %question, "Research run starting");

        // Provider failures downgrade to an empty result set.
        let hits = match self
            .searcher
            .search(question, self.config.result_limit)
            .await
        {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "Search failed, continuing with no sources");
                Vec::new()
            }
        };

        if hits.is_empty() {
            info!("No sources found, skipping summarization");
            return Ok(no_sources_report(question));
        }

        info!(source_count = hits.len(), "Sources found");

        // Map stage: one summary per source, in search order.
        let mut summaries = Vec::with_capacity(hits.len());
        for (index, hit) in hits.iter().enumerate() {
            let text = match self.extractor.extract(&hit.url).await {
                Ok(text) => text,
                Err(FetchError::Status { url, status }) => {
                    warn!(url = %url, status = status, "Non-success status, using failure marker");
                    format!("Failed to extract text from {} (HTTP {})", url, status)
                }
                Err(FetchError::Transport { url, source }) => {
                    warn!(url = %url, error = %source, "Transport error, using empty text");
                    String::new()
                }
            };

            debug!(url = %hit.url, index = index, text_len = text.len(), "Source extracted");

            let summary = self
                .summarizer
                .summarize(SummaryInput::Text(text), Some(question))
                .await?;

            debug!(url = %hit.url, index = index, summary_len = summary.len(), "Source summarized");
            summaries.push(summary);
        }

        // Reduce stage: one report over all per-source summaries.
        let report = self
            .summarizer
            .summarize(SummaryInput::Batch(summaries), Some(question))
            .await?;

        info!(report_len = report.len(), "Research run completed");
        Ok(report)
    }
}

/// Report returned when the search step finds nothing.
///
/// The model is not invoked in this case; there is no source material to
/// reduce.
fn no_sources_report(question: &str) -> String {
    format!(
        "# Research Report\n\nNo web sources were found for the question:\n\n> {}\n\n\
         Try rephrasing the question or checking your network connection.",
        question
    )
}
