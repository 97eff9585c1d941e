//! LLM prompts for the research pipeline.
//!
//! One prompt serves both stages: the map stage fills `{summaries}` with a
//! single extracted text, the reduce stage with the combined per-source
//! summaries. The question slot is never dropped; when no question is
//! given, an explicit placeholder takes its place.

/// Prompt for writing a report from source material.
pub const REPORT_PROMPT: &str = r#"You are a research analyst.
Based on the following summaries from multiple sources, write a comprehensive,
factual, and well-structured report answering the question below.

{question}

Summaries:
{summaries}

Write the final report in Markdown format (with sections, bullets, and sources if mentioned)."#;

/// Placeholder for the question slot when no question is supplied.
pub const NO_QUESTION_PLACEHOLDER: &str = "No specific question provided";

/// Fill the report prompt.
pub fn format_report_prompt(question: Option<&str>, summaries: &str) -> String {
    let question_text = match question {
        Some(q) if !q.trim().is_empty() => format!("Question: {}", q),
        _ => NO_QUESTION_PLACEHOLDER.to_string(),
    };

    REPORT_PROMPT
        .replace("{question}", &question_text)
        .replace("{summaries}", summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_embedded_verbatim() {
        let prompt = format_report_prompt(Some("What is quantum computing?"), "some text");
        assert!(prompt.contains("Question: What is quantum computing?"));
        assert!(prompt.contains("some text"));
        assert!(!prompt.contains("{question}"));
        assert!(!prompt.contains("{summaries}"));
    }

    #[test]
    fn test_placeholder_when_question_absent() {
        let prompt = format_report_prompt(None, "some text");
        assert!(prompt.contains(NO_QUESTION_PLACEHOLDER));
        assert!(!prompt.contains("Question:"));
    }

    #[test]
    fn test_placeholder_when_question_blank() {
        let prompt = format_report_prompt(Some("   "), "some text");
        assert!(prompt.contains(NO_QUESTION_PLACEHOLDER));
    }
}
