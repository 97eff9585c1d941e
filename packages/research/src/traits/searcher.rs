//! Web searcher trait for source discovery.
//!
//! The pipeline's first stage maps a research question to candidate URLs.
//! This trait abstracts over search providers (DuckDuckGo, SerpAPI, Google
//! Custom Search, etc.) so the pipeline never depends on one of them.

use async_trait::async_trait;

use crate::error::SearchResult;

/// A discovered URL from web search with optional metadata.
///
/// The pipeline only consumes `url`; `title` and `snippet` are kept for
/// logging and for adapters that want to show what is being read.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The discovered URL.
    pub url: String,

    /// Title of the page (if the provider supplies one).
    pub title: Option<String>,

    /// Snippet/description from the result listing.
    pub snippet: Option<String>,
}

impl SearchHit {
    /// Create a new hit from a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            snippet: None,
        }
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// Web search trait for source discovery.
///
/// # Implementations
///
/// - `DuckDuckGoSearcher` - DuckDuckGo HTML endpoint, no API key
/// - `MockWebSearcher` - for testing
///
/// # Contract
///
/// `search` returns at most `limit` hits, in provider order, fewer if the
/// provider has fewer matches. Implementations do not retry; a failed
/// attempt is an `Err`, and the pipeline decides what to do with it.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search the web for URLs relevant to the query.
    async fn search(&self, query: &str, limit: usize) -> SearchResult<Vec<SearchHit>>;
}

/// Mock web searcher for testing.
///
/// Returns canned hits per query, or a forced failure.
#[derive(Default)]
pub struct MockWebSearcher {
    results: std::sync::RwLock<std::collections::HashMap<String, Vec<SearchHit>>>,
    fail: std::sync::atomic::AtomicBool,
}

impl MockWebSearcher {
    /// Create a new mock searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add hits for a query.
    pub fn with_hits(self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.results.write().unwrap().insert(query.to_string(), hits);
        self
    }

    /// Add URL strings as hits.
    pub fn with_urls(self, query: &str, urls: &[&str]) -> Self {
        let hits = urls.iter().map(|u| SearchHit::new(*u)).collect();
        self.with_hits(query, hits)
    }

    /// Make every search call fail.
    pub fn with_failure(self) -> Self {
        self.fail.store(true, std::sync::atomic::Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, query: &str, limit: usize) -> SearchResult<Vec<SearchHit>> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(crate::error::SearchError::Status { status: 500 });
        }

        let mut hits = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        hits.truncate(limit);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_searcher_returns_canned_hits() {
        let searcher = MockWebSearcher::new().with_urls(
            "quantum computing",
            &["https://a.example/qc", "https://b.example/qc"],
        );

        let hits = searcher.search("quantum computing", 5).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://a.example/qc");
    }

    #[tokio::test]
    async fn test_mock_searcher_respects_limit() {
        let searcher = MockWebSearcher::new().with_urls(
            "query",
            &["https://a.example", "https://b.example", "https://c.example"],
        );

        let hits = searcher.search("query", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_searcher_unknown_query_is_empty() {
        let searcher = MockWebSearcher::new();
        let hits = searcher.search("anything", 3).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_mock_searcher_forced_failure() {
        let searcher = MockWebSearcher::new().with_failure();
        assert!(searcher.search("anything", 3).await.is_err());
    }
}
