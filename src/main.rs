//! Command-line entry point.
//!
//! # Run sequence
//!
//! 1. Load `.env` (if present) so `GROQ_API_KEY` can live next to the project.
//! 2. Initialise logging.
//! 3. Load [`AppConfig`] (defaults on first run) and apply CLI overrides.
//! 4. Resolve the input text (`--text`, `--input`, or the built-in sample).
//! 5. Build the tokenizer, the API client and the [`SpeechRewriter`].
//! 6. Run the rewrite; write the result to the final-text file.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use speech_numbers::{
    config::AppConfig,
    extract::WordTokenizer,
    llm::{ApiClient, PromptBuilder},
    rewrite::SpeechRewriter,
};

const SAMPLE_TEXT: &str =
    "The price is $100, and I bought 3 items on 2024-05-08.  The car's top speed is 200 km/h.";

#[derive(Debug, Parser)]
#[command(
    name = "speech-numbers",
    version,
    about = "Rewrite the numbers in a text as they should be spoken"
)]
struct Cli {
    /// Settings file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text to rewrite.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// File to read the text from (`-` for stdin).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Tokens taken on each side of a number.
    #[arg(long)]
    window: Option<usize>,

    /// Append-only log of per-number answers.
    #[arg(long)]
    answer_log: Option<PathBuf>,

    /// File the rewritten text is written to (overwritten).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Model identifier sent to the service.
    #[arg(long)]
    model: Option<String>,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config ({e}); using defaults");
            AppConfig::default()
        }),
    };

    if let Some(window) = cli.window {
        config.extract.window_radius = window;
    }
    if let Some(path) = &cli.answer_log {
        config.output.answer_log = path.clone();
    }
    if let Some(path) = &cli.output {
        config.output.final_text = path.clone();
    }
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    Ok(config)
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    match cli.input.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => Ok(SAMPLE_TEXT.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. .env
    dotenvy::dotenv().ok();

    // 2. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 3. Configuration
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // 4. Input
    let text = read_input(&cli)?;

    // 5. Collaborators
    let rewriter = SpeechRewriter::new(
        Arc::new(WordTokenizer::new()),
        Arc::new(ApiClient::from_config(&config.llm)),
        PromptBuilder::from_config(&config.llm),
    );

    // 6. Rewrite + persist
    let rewritten = rewriter
        .rewrite(
            &text,
            config.extract.window_radius,
            &config.output.answer_log,
        )
        .await?;

    let Some(rewritten) = rewritten else {
        log::info!("No rewritten text produced");
        return Ok(());
    };

    match std::fs::write(&config.output.final_text, &rewritten) {
        Ok(()) => log::info!(
            "Final text saved to {}",
            config.output.final_text.display()
        ),
        Err(e) => log::error!(
            "Error saving final text to {}: {e}",
            config.output.final_text.display()
        ),
    }
    println!("{rewritten}");

    Ok(())
}
