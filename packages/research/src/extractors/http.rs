//! HTTP-based text extractor.
//!
//! One GET per URL, transport defaults for redirects, a bounded timeout,
//! no retry. The body is projected to visible plain text: scripts, styles,
//! and markup are stripped, entities decoded, and whitespace collapsed to
//! single spaces.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::traits::extractor::TextExtractor;

/// HTTP text extractor.
///
/// # Example
///
/// ```rust,ignore
/// use research::extractors::HttpTextExtractor;
///
/// let extractor = HttpTextExtractor::new();
/// let text = extractor.extract("https://example.com").await?;
/// ```
pub struct HttpTextExtractor {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTextExtractor {
    /// Create a new extractor with default settings.
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

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Project an HTML document to its visible text.
    ///
    /// Lossy by design: non-visible nodes are dropped, everything else is
    /// flattened to space-separated tokens.
    fn html_to_text(html: &str) -> String {
        let mut text = html.to_string();

        // Remove non-visible content wholesale
        let script_pattern = regex::Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
        let style_pattern = regex::Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
        let noscript_pattern = regex::Regex::new(r"(?is)<noscript[^>]*>.*?</noscript>").unwrap();
        let head_pattern = regex::Regex::new(r"(?is)<head[^>]*>.*?</head>").unwrap();
        let comment_pattern = regex::Regex::new(r"(?s)<!--.*?-->").unwrap();
        text = script_pattern.replace_all(&text, " ").to_string();
        text = style_pattern.replace_all(&text, " ").to_string();
        text = noscript_pattern.replace_all(&text, " ").to_string();
        text = head_pattern.replace_all(&text, " ").to_string();
        text = comment_pattern.replace_all(&text, " ").to_string();

        // Replace remaining tags with a separator so adjacent words from
        // different elements do not fuse together
        let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
        text = tag_pattern.replace_all(&text, " ").to_string();

        // Decode common HTML entities
        text = text
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        // Collapse whitespace to single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[async_trait]
impl TextExtractor for HttpTextExtractor {
    async fn extract(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "Fetch starting");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        let text = Self::html_to_text(&html);
        debug!(url = %url, text_len = text.len(), "Fetch completed");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_markup() {
        let html = r#"
            <html><head><title>Ignored</title><style>body { color: red; }</style></head>
            <body>
                <h1>Quantum Computing</h1>
                <p>Uses <b>qubits</b> instead of bits.</p>
                <script>console.log("ignored");</script>
            </body></html>
        "#;

        let text = HttpTextExtractor::html_to_text(html);
        assert_eq!(text, "Quantum Computing Uses qubits instead of bits.");
    }

    #[test]
    fn test_html_to_text_decodes_entities() {
        let html = "<p>Shor&#39;s algorithm &amp; Grover&#39;s algorithm</p>";
        let text = HttpTextExtractor::html_to_text(html);
        assert_eq!(text, "Shor's algorithm & Grover's algorithm");
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        let html = "<div>  spaced \n\n  out \t tokens  </div>";
        let text = HttpTextExtractor::html_to_text(html);
        assert_eq!(text, "spaced out tokens");
    }

    #[test]
    fn test_html_to_text_separates_adjacent_elements() {
        let html = "<li>alpha</li><li>beta</li>";
        let text = HttpTextExtractor::html_to_text(html);
        assert_eq!(text, "alpha beta");
    }

    #[tokio::test]
    async fn test_transport_error_on_unreachable_host() {
        let extractor = HttpTextExtractor::new();
        match extractor.extract("http://127.0.0.1:59998/page").await {
            Err(FetchError::Transport { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:59998/page");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
