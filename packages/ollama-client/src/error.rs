//! Error types for the Ollama client.

use thiserror::Error;

/// Result type for Ollama client operations.
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Ollama client errors.
///
/// `Network` is kept separate from `Api` so callers can tell "the server
/// is not running" apart from "the server rejected the request".
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Configuration error (invalid base URL, missing settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, unknown model, invalid request)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OllamaError {
    /// Whether this error means the server could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, OllamaError::Network(_))
    }
}
