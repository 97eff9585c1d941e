//! Web research pipeline library
//!
//! Answers a free-text research question by gathering web content,
//! condensing it with a local language model, and synthesizing a final
//! Markdown report.
//!
//! # Design
//!
//! The pipeline is a two-stage map-reduce over web sources:
//!
//! 1. **Search** - the question goes to a search provider, yielding an
//!    ordered list of candidate URLs.
//! 2. **Map** - each URL is fetched and its text summarized against the
//!    question, one summary per source, order preserved.
//! 3. **Reduce** - the per-source summaries are combined and summarized
//!    once more into the final report.
//!
//! Failures are handled by policy, not by catch blocks: a failed search
//! means zero sources, a failed fetch means degraded text for that one
//! source, and a failed inference call ends the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ollama_client::OllamaClient;
//! use research::{
//!     extractors::HttpTextExtractor, searchers::DuckDuckGoSearcher,
//!     summarizers::OllamaSummarizer, ResearchPipeline,
//! };
//!
//! let pipeline = ResearchPipeline::new(
//!     DuckDuckGoSearcher::new(),
//!     HttpTextExtractor::new(),
//!     OllamaSummarizer::new(OllamaClient::new()),
//! );
//!
//! let report = pipeline.research("What is quantum computing?").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (WebSearcher, TextExtractor, Summarizer)
//! - [`pipeline`] - The map-reduce orchestration and prompts
//! - [`searchers`] - Search provider implementations
//! - [`extractors`] - Text extractor implementations
//! - [`summarizers`] - Summarizer implementations
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod extractors;
pub mod pipeline;
pub mod searchers;
pub mod summarizers;
pub mod testing;
pub mod traits;

// Re-export core types at crate root
pub use config::PipelineConfig;
pub use error::{FetchError, ResearchError, SearchError};
pub use traits::{
    extractor::{MockFetchFailure, MockTextExtractor, TextExtractor},
    searcher::{MockWebSearcher, SearchHit, WebSearcher},
    summarizer::{Summarizer, SummaryInput},
};

// Re-export the pipeline entry point
pub use pipeline::ResearchPipeline;

// Re-export prompt helpers
pub use pipeline::{format_report_prompt, NO_QUESTION_PLACEHOLDER, REPORT_PROMPT};

// Re-export implementations
pub use extractors::HttpTextExtractor;
pub use searchers::DuckDuckGoSearcher;
pub use summarizers::{OllamaSummarizer, SummarizerConfig};

// Re-export testing utilities
pub use testing::{MockSummarizer, SummarizeCall};
