//! Summarizer trait for LLM-backed report writing.
//!
//! One trait method serves both pipeline stages. The map stage passes a
//! single extracted text, the reduce stage passes the batch of per-source
//! summaries; `SummaryInput` makes that an explicit tagged union instead
//! of an untyped either-or.

use async_trait::async_trait;

use crate::error::Result;

/// Input to a summarization call.
///
/// A batch is combined into one block with a blank-line separator before
/// prompting, so `Text(s)` and `Batch(vec![s])` are observably equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryInput {
    /// One extracted text (map stage).
    Text(String),

    /// Ordered prior summaries (reduce stage).
    Batch(Vec<String>),
}

impl SummaryInput {
    /// Combine into the single text block fed to the prompt.
    ///
    /// Batch order is preserved; parts are joined with a blank line.
    pub fn combined(&self) -> String {
        match self {
            SummaryInput::Text(text) => text.clone(),
            SummaryInput::Batch(parts) => parts.join("\n\n"),
        }
    }

    /// Number of source texts behind this input.
    pub fn source_count(&self) -> usize {
        match self {
            SummaryInput::Text(_) => 1,
            SummaryInput::Batch(parts) => parts.len(),
        }
    }
}

impl From<String> for SummaryInput {
    fn from(text: String) -> Self {
        SummaryInput::Text(text)
    }
}

impl From<Vec<String>> for SummaryInput {
    fn from(parts: Vec<String>) -> Self {
        SummaryInput::Batch(parts)
    }
}

/// Summarizer trait.
///
/// # Implementations
///
/// - `OllamaSummarizer` - local Ollama model
/// - `MockSummarizer` (in [`crate::testing`]) - for testing
///
/// # Contract
///
/// The question, when given, is embedded verbatim in the prompt; when
/// absent, an explicit placeholder takes its slot. Failures are fatal to
/// the caller's run: a report cannot be produced without the model, so
/// implementations never swallow backend errors.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Compress the input into a structured Markdown report guided by the
    /// question.
    async fn summarize(&self, input: SummaryInput, question: Option<&str>) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text_and_batch_of_one_combine_identically() {
        let text = SummaryInput::Text("qubits".to_string());
        let batch = SummaryInput::Batch(vec!["qubits".to_string()]);
        assert_eq!(text.combined(), batch.combined());
    }

    #[test]
    fn test_batch_combines_in_order_with_blank_lines() {
        let batch = SummaryInput::Batch(vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ]);
        assert_eq!(batch.combined(), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_source_count() {
        assert_eq!(SummaryInput::Text("x".to_string()).source_count(), 1);
        assert_eq!(SummaryInput::Batch(vec![]).source_count(), 0);
        assert_eq!(
            SummaryInput::Batch(vec!["a".into(), "b".into()]).source_count(),
            2
        );
    }
}
