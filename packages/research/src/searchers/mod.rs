//! Search provider implementations.

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoSearcher;
