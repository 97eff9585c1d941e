//! Interactive terminal adapter for the research pipeline.
//!
//! Collects a question string, invokes `ResearchPipeline::research`, and
//! renders the resulting report. Blank questions are rejected here, before
//! the pipeline is invoked; an unreachable inference backend gets its own
//! hint instead of a generic error dump.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing_subscriber::EnvFilter;

use ollama_client::OllamaClient;
use research::{
    DuckDuckGoSearcher, HttpTextExtractor, OllamaSummarizer, PipelineConfig, ResearchError,
    ResearchPipeline, SummarizerConfig,
};

const DEFAULT_MODEL: &str = "deepseek-r1:1.5b";

type Pipeline = ResearchPipeline<DuckDuckGoSearcher, HttpTextExtractor, OllamaSummarizer>;

/// Web research assistant backed by a local Ollama model.
#[derive(Parser)]
#[command(name = "research", version, about)]
struct Args {
    /// Research question; starts an interactive session when omitted
    question: Option<String>,

    /// Model name as known to the Ollama server
    #[arg(long)]
    model: Option<String>,

    /// Maximum number of web sources per question
    #[arg(long)]
    limit: Option<usize>,

    /// Ollama server URL
    #[arg(long)]
    ollama_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("research=info,research_cli=info")),
        )
        .init();

    let args = Args::parse();

    let model = args
        .model
        .or_else(|| std::env::var("RESEARCH_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let limit = args
        .limit
        .or_else(|| {
            std::env::var("RESEARCH_RESULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .unwrap_or(3);
    let ollama_url = args
        .ollama_url
        .or_else(|| std::env::var("OLLAMA_URL").ok())
        .unwrap_or_else(|| ollama_client::DEFAULT_BASE_URL.to_string());

    let client = OllamaClient::with_base_url(ollama_url.clone());
    let pipeline = ResearchPipeline::new(
        DuckDuckGoSearcher::new(),
        HttpTextExtractor::new(),
        OllamaSummarizer::new(client.clone())
            .with_config(SummarizerConfig::for_model(model.clone())),
    )
    .with_config(PipelineConfig::new().with_result_limit(limit));

    match args.question {
        Some(question) => {
            if is_blank(&question) {
                eprintln!("{}", "❌ Please enter a non-empty question.".bright_red());
                std::process::exit(2);
            }
            run_question(&pipeline, &question, &ollama_url).await;
        }
        None => interactive_loop(&pipeline, &client, &model, &ollama_url).await?,
    }

    Ok(())
}

fn is_blank(question: &str) -> bool {
    question.trim().is_empty()
}

async fn interactive_loop(
    pipeline: &Pipeline,
    client: &OllamaClient,
    model: &str,
    ollama_url: &str,
) -> Result<()> {
    let term = Term::stdout();
    print_banner(&term)?;
    check_backend(client, model, ollama_url).await;

    loop {
        println!();
        let options = vec!["🔍 Ask a research question", "🛑 Exit"];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => {
                let question: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Research question")
                    .allow_empty(true)
                    .interact_text_on(&term)?;

                if is_blank(&question) {
                    println!("{}", "❌ Please enter a non-empty question.".bright_red());
                    continue;
                }

                run_question(pipeline, &question, ollama_url).await;
            }
            1 => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

async fn run_question(pipeline: &Pipeline, question: &str, ollama_url: &str) {
    println!();
    println!("{}", "🔍 Researching, this may take a moment...".bright_yellow());

    match pipeline.research(question).await {
        Ok(report) => {
            println!();
            println!("{}", "═".repeat(60).bright_cyan());
            println!("{}", "📊 RESEARCH REPORT".bright_cyan().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!("{}", report);
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Err(e) => print_error(&e, ollama_url),
    }
}

fn print_error(error: &ResearchError, ollama_url: &str) {
    println!();
    println!("{} {}", "❌ Research failed:".bright_red().bold(), error);

    if let ResearchError::InferenceUnavailable { .. } = error {
        println!(
            "{}",
            format!(
                "💡 The inference backend at {} is not responding. \
                 Start it with `ollama serve` and pull the model first.",
                ollama_url
            )
            .bright_yellow()
        );
    }
}

async fn check_backend(client: &OllamaClient, model: &str, ollama_url: &str) {
    match client.list_models().await {
        Ok(models) => {
            let model_known = models.iter().any(|m| m.name.starts_with(model));
            if model_known {
                println!("{}", format!("✅ Ollama ready, model {} found", model).bright_green());
            } else {
                println!(
                    "{}",
                    format!(
                        "⚠️  Ollama is running but model {} was not found. \
                         Pull it with `ollama pull {}`.",
                        model, model
                    )
                    .bright_yellow()
                );
            }
        }
        Err(e) => {
            println!(
                "{}",
                format!("⚠️  Could not reach Ollama at {}: {}", ollama_url, e).bright_yellow()
            );
            println!(
                "{}",
                "   Research will fail until the backend is started (`ollama serve`).".yellow()
            );
        }
    }
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║        🤖 Research Assistant           ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("What is quantum computing?"));
    }
}
