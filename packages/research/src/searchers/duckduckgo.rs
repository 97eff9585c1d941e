//! DuckDuckGo-backed web searcher.
//!
//! Uses the HTML endpoint rather than an API: no key, no quota account.
//! Result anchors point at DuckDuckGo's redirect service, so the real
//! target URL has to be pulled out of the `uddg` query parameter.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{SearchError, SearchResult};
use crate::traits::searcher::{SearchHit, WebSearcher};

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo web searcher.
pub struct DuckDuckGoSearcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for DuckDuckGoSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DuckDuckGoSearcher {
    /// Create a new searcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "ResearchAssistant/0.1".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pull result URLs out of the result page, in listing order.
    fn extract_result_urls(html: &str, limit: usize) -> Vec<SearchHit> {
        // Result anchors carry the result__a class; ads go through y.js
        // and are skipped by the redirect decoder below.
        let anchor_pattern =
            regex::Regex::new(r#"<a[^>]*class="[^"]*result__a[^"]*"[^>]*href="([^"]+)""#).unwrap();

        let mut hits = Vec::new();
        for cap in anchor_pattern.captures_iter(html) {
            if hits.len() >= limit {
                break;
            }
            if let Some(href) = cap.get(1) {
                if let Some(target) = Self::decode_redirect(href.as_str()) {
                    hits.push(SearchHit::new(target));
                }
            }
        }
        hits
    }

    /// Resolve a result href to the target URL.
    ///
    /// Organic results look like `//duckduckgo.com/l/?uddg=<encoded>&rut=…`;
    /// the target is the decoded `uddg` value. Hrefs that already point
    /// somewhere are kept as-is; ad redirects (`y.js`) are dropped.
    fn decode_redirect(href: &str) -> Option<String> {
        let base = Url::parse(SEARCH_ENDPOINT).ok()?;
        let resolved = base.join(href).ok()?;

        if resolved.path().ends_with("y.js") {
            return None;
        }

        if resolved.path() == "/l/" || resolved.path() == "/l" {
            return resolved
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned());
        }

        Some(resolved.to_string())
    }
}

#[async_trait]
impl WebSearcher for DuckDuckGoSearcher {
    async fn search(&self, query: &str, limit: usize) -> SearchResult<Vec<SearchHit>> {
        let request_url = Url::parse_with_params(SEARCH_ENDPOINT, &[("q", query)])
            .map_err(|e| SearchError::Malformed(e.to_string()))?;

        debug!(query = %query, limit = limit, "DuckDuckGo search starting");

        let response = self
            .client
            .get(request_url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let hits = Self::extract_result_urls(&html, limit);
        debug!(query = %query, hit_count = hits.len(), "DuckDuckGo search completed");

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_redirect_unwraps_uddg() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc123";
        assert_eq!(
            DuckDuckGoSearcher::decode_redirect(href),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_decode_redirect_keeps_direct_links() {
        let href = "https://example.com/direct";
        assert_eq!(
            DuckDuckGoSearcher::decode_redirect(href),
            Some("https://example.com/direct".to_string())
        );
    }

    #[test]
    fn test_decode_redirect_drops_ads() {
        let href = "//duckduckgo.com/y.js?ad_provider=bing&u3=https%3A%2F%2Fads.example";
        assert_eq!(DuckDuckGoSearcher::decode_redirect(href), None);
    }

    #[test]
    fn test_extract_result_urls_in_order_with_limit() {
        let html = r#"
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Ffirst.example%2F">First</a>
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fsecond.example%2F">Second</a>
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fthird.example%2F">Third</a>
        "#;

        let hits = DuckDuckGoSearcher::extract_result_urls(html, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://first.example/");
        assert_eq!(hits[1].url, "https://second.example/");
    }

    #[test]
    fn test_extract_result_urls_ignores_other_anchors() {
        let html = r#"
            <a class="nav" href="https://duckduckgo.com/about">About</a>
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fonly.example%2F">Only</a>
        "#;

        let hits = DuckDuckGoSearcher::extract_result_urls(html, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://only.example/");
    }
}
