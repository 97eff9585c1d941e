//! Text extractor implementations.

pub mod http;

pub use http::HttpTextExtractor;
