//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the research library
//! without making real model or network calls. `MockWebSearcher` and
//! `MockTextExtractor` live next to their traits; the summarizer mock is
//! here because it carries call tracking.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ResearchError, Result};
use crate::traits::summarizer::{Summarizer, SummaryInput};

/// Record of one call made to [`MockSummarizer`].
#[derive(Debug, Clone)]
pub struct SummarizeCall {
    /// The combined text block the prompt would be built from.
    pub combined: String,

    /// Number of source texts behind the input.
    pub source_count: usize,

    /// Whether the input was a batch (reduce stage) or a single text.
    pub batch: bool,

    /// The question passed with the call.
    pub question: Option<String>,
}

/// A mock summarizer for testing.
///
/// Returns deterministic summaries derived from the combined input (or
/// canned ones), records every call for assertions, and can be told to
/// fail from a given call index onward.
#[derive(Default)]
pub struct MockSummarizer {
    /// Canned outputs keyed by exact combined input.
    canned: Arc<RwLock<HashMap<String, String>>>,

    /// Call log for assertions.
    calls: Arc<RwLock<Vec<SummarizeCall>>>,

    /// Calls with index >= this fail as InferenceUnavailable.
    fail_from_call: Arc<RwLock<Option<usize>>>,
}

impl MockSummarizer {
    /// Create a new mock summarizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned output for an exact combined input.
    pub fn with_canned(self, combined: impl Into<String>, output: impl Into<String>) -> Self {
        self.canned
            .write()
            .unwrap()
            .insert(combined.into(), output.into());
        self
    }

    /// Fail every call, simulating a backend that is down for the run.
    pub fn unavailable(self) -> Self {
        self.unavailable_from_call(0)
    }

    /// Fail calls from the given index onward (0-based).
    ///
    /// `unavailable_from_call(n)` lets a test let the map stage succeed
    /// and fail only at the reduce stage, or vice versa.
    pub fn unavailable_from_call(self, index: usize) -> Self {
        *self.fail_from_call.write().unwrap() = Some(index);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<SummarizeCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, input: SummaryInput, question: Option<&str>) -> Result<String> {
        let combined = input.combined();

        let call_index = {
            let mut calls = self.calls.write().unwrap();
            calls.push(SummarizeCall {
                combined: combined.clone(),
                source_count: input.source_count(),
                batch: matches!(input, SummaryInput::Batch(_)),
                question: question.map(|q| q.to_string()),
            });
            calls.len() - 1
        };

        if let Some(fail_from) = *self.fail_from_call.read().unwrap() {
            if call_index >= fail_from {
                return Err(ResearchError::InferenceUnavailable {
                    message: "mock backend down".to_string(),
                });
            }
        }

        if let Some(canned) = self.canned.read().unwrap().get(&combined) {
            return Ok(canned.clone());
        }

        // Output depends only on the combined block, so a single text and
        // a batch of one summarize identically.
        Ok(format!("[summary] {}", combined))
    }
}
