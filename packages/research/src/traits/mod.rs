//! Core trait abstractions for the research pipeline.
//!
//! Each external collaborator sits behind one trait:
//!
//! - [`searcher::WebSearcher`] - keyword query to candidate URLs
//! - [`extractor::TextExtractor`] - URL to plain text
//! - [`summarizer::Summarizer`] - text (or prior summaries) to a report
//!
//! The pipeline is generic over all three, so any of them can be swapped
//! for a mock in tests or for a different provider in production.

pub mod extractor;
pub mod searcher;
pub mod summarizer;

pub use extractor::{MockFetchFailure, MockTextExtractor, TextExtractor};
pub use searcher::{MockWebSearcher, SearchHit, WebSearcher};
pub use summarizer::{Summarizer, SummaryInput};
