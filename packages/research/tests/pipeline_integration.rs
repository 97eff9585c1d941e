//! Integration tests for the research pipeline.
//!
//! These exercise the full search → map → reduce flow through the public
//! surface, with all three components mocked:
//! - every source found produces exactly one summary, in search order
//! - a failed source degrades its text instead of dropping it
//! - search failure means an empty run, not an error
//! - inference failure ends the run from either stage

use research::{
    testing::MockSummarizer, MockFetchFailure, MockTextExtractor, MockWebSearcher, PipelineConfig,
    ResearchError, ResearchPipeline,
};

const QUESTION: &str = "What is quantum computing?";

const URLS: [&str; 3] = [
    "https://a.example/intro",
    "https://b.example/qubits",
    "https://c.example/algorithms",
];

/// Pipeline with three well-behaved sources.
fn happy_pipeline() -> ResearchPipeline<MockWebSearcher, MockTextExtractor, MockSummarizer> {
    let searcher = MockWebSearcher::new().with_urls(QUESTION, &URLS);
    let extractor = MockTextExtractor::new()
        .with_page(URLS[0], "Quantum computing uses quantum mechanics.")
        .with_page(URLS[1], "Qubits can be in superposition.")
        .with_page(URLS[2], "Shor's algorithm factors integers.");
    ResearchPipeline::new(searcher, extractor, MockSummarizer::new())
}

#[tokio::test]
async fn test_three_sources_produce_a_report() {
    // Scenario: search returns 3 URLs and everything succeeds.
    let pipeline = happy_pipeline();

    let report = pipeline.research(QUESTION).await.unwrap();
    assert!(!report.is_empty());

    // 3 map calls + 1 reduce call, reduce over exactly 3 summaries.
    let calls = pipeline_calls(&pipeline);
    assert_eq!(calls.len(), 4);
    let reduce = calls.last().unwrap();
    assert!(reduce.batch);
    assert_eq!(reduce.source_count, 3);
}

#[tokio::test]
async fn test_reduce_receives_summaries_in_url_order() {
    let pipeline = happy_pipeline();
    pipeline.research(QUESTION).await.unwrap();

    let calls = pipeline_calls(&pipeline);

    // Map calls see the extracted texts in search order.
    assert!(calls[0].combined.contains("quantum mechanics"));
    assert!(calls[1].combined.contains("superposition"));
    assert!(calls[2].combined.contains("Shor's algorithm"));

    // The reduce block preserves that order.
    let reduce = &calls[3].combined;
    let pos_a = reduce.find("quantum mechanics").unwrap();
    let pos_b = reduce.find("superposition").unwrap();
    let pos_c = reduce.find("Shor's algorithm").unwrap();
    assert!(pos_a < pos_b && pos_b < pos_c);
}

#[tokio::test]
async fn test_question_reaches_every_summarizer_call() {
    let pipeline = happy_pipeline();
    pipeline.research(QUESTION).await.unwrap();

    for call in pipeline_calls(&pipeline) {
        assert_eq!(call.question.as_deref(), Some(QUESTION));
    }
}

#[tokio::test]
async fn test_failed_extraction_does_not_drop_the_source() {
    // Scenario: 1 of 3 URLs fails with a transport error. The reduce step
    // must still receive 3 summaries, one derived from empty text.
    let searcher = MockWebSearcher::new().with_urls(QUESTION, &URLS);
    let extractor = MockTextExtractor::new()
        .with_page(URLS[0], "Quantum computing uses quantum mechanics.")
        .with_failure(URLS[1], MockFetchFailure::Transport)
        .with_page(URLS[2], "Shor's algorithm factors integers.");
    let pipeline = ResearchPipeline::new(searcher, extractor, MockSummarizer::new());

    pipeline.research(QUESTION).await.unwrap();

    let calls = pipeline_calls(&pipeline);
    assert_eq!(calls.len(), 4);
    // The failed source was summarized from empty text, not skipped.
    assert_eq!(calls[1].combined, "");
    assert_eq!(calls.last().unwrap().source_count, 3);
}

#[tokio::test]
async fn test_non_success_status_becomes_marker_text() {
    let searcher = MockWebSearcher::new().with_urls(QUESTION, &[URLS[0]]);
    let extractor =
        MockTextExtractor::new().with_failure(URLS[0], MockFetchFailure::Status(404));
    let pipeline = ResearchPipeline::new(searcher, extractor, MockSummarizer::new());

    pipeline.research(QUESTION).await.unwrap();

    let calls = pipeline_calls(&pipeline);
    assert!(calls[0].combined.contains(URLS[0]));
    assert!(calls[0].combined.contains("404"));
}

#[tokio::test]
async fn test_search_failure_yields_no_sources_report() {
    // Scenario: the search provider errors out. The run completes with
    // the no-sources report and the model is never invoked.
    let searcher = MockWebSearcher::new().with_failure();
    let pipeline =
        ResearchPipeline::new(searcher, MockTextExtractor::new(), MockSummarizer::new());

    let report = pipeline.research(QUESTION).await.unwrap();
    assert!(report.contains("No web sources were found"));
    assert!(report.contains(QUESTION));
    assert!(pipeline_calls(&pipeline).is_empty());
}

#[tokio::test]
async fn test_zero_results_short_circuits_without_inference() {
    // Scenario: search succeeds but has no matches.
    let searcher = MockWebSearcher::new();
    let pipeline =
        ResearchPipeline::new(searcher, MockTextExtractor::new(), MockSummarizer::new());

    let report = pipeline.research(QUESTION).await.unwrap();
    assert!(report.contains("No web sources were found"));
    assert!(pipeline_calls(&pipeline).is_empty());
}

#[tokio::test]
async fn test_inference_down_fails_the_run_at_map_stage() {
    // Scenario: the backend is down for the entire run; the very first
    // summarization call fails and propagates out unrecovered.
    let searcher = MockWebSearcher::new().with_urls(QUESTION, &URLS);
    let pipeline = ResearchPipeline::new(
        searcher,
        MockTextExtractor::new(),
        MockSummarizer::new().unavailable(),
    );

    let err = pipeline.research(QUESTION).await.unwrap_err();
    assert!(matches!(err, ResearchError::InferenceUnavailable { .. }));
}

#[tokio::test]
async fn test_inference_failure_at_reduce_stage_propagates() {
    // All three map calls succeed; call index 3 (the reduce) fails.
    let searcher = MockWebSearcher::new().with_urls(QUESTION, &URLS);
    let pipeline = ResearchPipeline::new(
        searcher,
        MockTextExtractor::new(),
        MockSummarizer::new().unavailable_from_call(3),
    );

    let err = pipeline.research(QUESTION).await.unwrap_err();
    assert!(matches!(err, ResearchError::InferenceUnavailable { .. }));
}

#[tokio::test]
async fn test_blank_question_is_rejected_before_any_work() {
    let searcher = MockWebSearcher::new().with_urls("", &URLS);
    let pipeline =
        ResearchPipeline::new(searcher, MockTextExtractor::new(), MockSummarizer::new());

    let err = pipeline.research("   ").await.unwrap_err();
    assert!(matches!(err, ResearchError::InvalidQuestion { .. }));
    assert!(pipeline_calls(&pipeline).is_empty());
}

#[tokio::test]
async fn test_result_limit_bounds_the_source_count() {
    let searcher = MockWebSearcher::new().with_urls(
        QUESTION,
        &[
            "https://a.example",
            "https://b.example",
            "https://c.example",
            "https://d.example",
            "https://e.example",
        ],
    );
    let pipeline =
        ResearchPipeline::new(searcher, MockTextExtractor::new(), MockSummarizer::new())
            .with_config(PipelineConfig::new().with_result_limit(2));

    pipeline.research(QUESTION).await.unwrap();

    let calls = pipeline_calls(&pipeline);
    assert_eq!(calls.len(), 3); // 2 map + 1 reduce
    assert_eq!(calls.last().unwrap().source_count, 2);
}

/// Shorthand for reading the summarizer call log out of a pipeline built
/// with `MockSummarizer`.
fn pipeline_calls<S, E>(
    pipeline: &ResearchPipeline<S, E, MockSummarizer>,
) -> Vec<research::SummarizeCall>
where
    S: research::WebSearcher,
    E: research::TextExtractor,
{
    pipeline.summarizer().calls()
}
