//! Summarizer implementations.

pub mod ollama;

pub use ollama::{OllamaSummarizer, SummarizerConfig};
