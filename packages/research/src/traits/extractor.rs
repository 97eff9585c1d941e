//! Text extractor trait for turning a source URL into plain text.
//!
//! One GET, no retries, no crawling beyond the page itself. The extracted
//! text is a lossy projection of the document: markup stripped, scripts
//! and styles removed, whitespace collapsed.

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};

/// Text extractor trait.
///
/// # Implementations
///
/// - `HttpTextExtractor` - plain HTTP GET plus markup stripping
/// - `MockTextExtractor` - for testing
///
/// # Contract
///
/// On a 2xx response, `extract` returns the visible text of the document.
/// Any failure is a typed `FetchError`; the pipeline downgrades it to
/// empty or marker text so the source count is preserved.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Fetch a URL and return its visible text.
    async fn extract(&self, url: &str) -> FetchResult<String>;
}

/// Failure mode for a mocked URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFetchFailure {
    /// Simulate a transport-level failure (connection refused etc.)
    Transport,
    /// Simulate a non-success HTTP status
    Status(u16),
}

/// Mock text extractor for testing.
///
/// Returns canned text per URL, a configured failure, or a derived
/// default for unknown URLs.
#[derive(Default)]
pub struct MockTextExtractor {
    pages: std::sync::RwLock<std::collections::HashMap<String, String>>,
    failures: std::sync::RwLock<std::collections::HashMap<String, MockFetchFailure>>,
}

impl MockTextExtractor {
    /// Create a new mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add canned text for a URL.
    pub fn with_page(self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), text.into());
        self
    }

    /// Make a URL fail with the given mode.
    pub fn with_failure(self, url: impl Into<String>, failure: MockFetchFailure) -> Self {
        self.failures.write().unwrap().insert(url.into(), failure);
        self
    }
}

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract(&self, url: &str) -> FetchResult<String> {
        if let Some(failure) = self.failures.read().unwrap().get(url) {
            return Err(match failure {
                MockFetchFailure::Transport => FetchError::Transport {
                    url: url.to_string(),
                    source: "mock transport failure".into(),
                },
                MockFetchFailure::Status(status) => FetchError::Status {
                    url: url.to_string(),
                    status: *status,
                },
            });
        }

        Ok(self
            .pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| format!("Text content of {}", url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_extractor_canned_text() {
        let extractor =
            MockTextExtractor::new().with_page("https://a.example", "Quantum computers use qubits.");

        let text = extractor.extract("https://a.example").await.unwrap();
        assert_eq!(text, "Quantum computers use qubits.");
    }

    #[tokio::test]
    async fn test_mock_extractor_failure_modes() {
        let extractor = MockTextExtractor::new()
            .with_failure("https://down.example", MockFetchFailure::Transport)
            .with_failure("https://gone.example", MockFetchFailure::Status(404));

        match extractor.extract("https://down.example").await {
            Err(FetchError::Transport { url, .. }) => assert_eq!(url, "https://down.example"),
            other => panic!("expected transport error, got {other:?}"),
        }

        match extractor.extract("https://gone.example").await {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
