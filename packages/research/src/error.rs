//! Typed errors for the research library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. The split between the three
//! enums encodes the recovery policy: `SearchError` and `FetchError` are
//! absorbed by the pipeline (a run continues with degraded input), while
//! `ResearchError` ends the run.

use thiserror::Error;

/// Errors that end a research run.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Inference backend could not be reached at all
    #[error("inference backend unreachable: {message}")]
    InferenceUnavailable { message: String },

    /// Inference backend was reached but generation failed
    #[error("inference error: {0}")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Blank or empty question
    #[error("invalid question: {reason}")]
    InvalidQuestion { reason: String },
}

/// Errors from the search provider.
///
/// The pipeline treats any of these as "zero results" for the run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request to the provider failed
    #[error("search request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider returned a non-success status
    #[error("search provider returned HTTP {status}")]
    Status { status: u16 },

    /// Provider response could not be parsed
    #[error("malformed search response: {0}")]
    Malformed(String),
}

/// Errors fetching a single source.
///
/// The pipeline downgrades these per source: a transport failure becomes
/// empty text, a non-success status becomes a marker string naming the
/// URL. The source stays in the batch either way.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Non-success HTTP status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },
}

/// Result type alias for run-fatal operations.
pub type Result<T> = std::result::Result<T, ResearchError>;

/// Result type alias for search operations.
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Result type alias for per-source fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
