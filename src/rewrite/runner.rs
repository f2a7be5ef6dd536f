//! Two-stage rewrite: per-number phrasing, then a whole-text rewrite.
//!
//! ```text
//! text ──extract──▶ [NumericContext]
//!        │ (none) ─▶ None
//!        ▼
//!   Stage A: for each number, sequentially
//!        phrase_request ─▶ ChatModel ─┬─ Ok  → SpeechAnswer → answer log
//!                                     ├─ Err (transient) → warn, skip
//!                                     └─ Err (fatal)     → abort
//!        ▼
//!   Stage B: rewrite_request(text, answers) ─▶ ChatModel ─▶ Some(rewritten)
//! ```
//!
//! Stage B is built from the answers held in memory; the log file is an
//! audit trail only and is closed before Stage B starts.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::extract::{extract, ExtractError, NumericContext, Tokenizer};
use crate::llm::{ChatModel, LlmError, PromptBuilder};
use crate::rewrite::answer::{AnswerLog, SpeechAnswer};

// ---------------------------------------------------------------------------
// RewriteError
// ---------------------------------------------------------------------------

/// Failures that abort a rewrite.
///
/// Per-number service errors and answer-log I/O errors are not here: the
/// first are skipped, the second end the run with `Ok(None)`.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

// ---------------------------------------------------------------------------
// SpeechRewriter
// ---------------------------------------------------------------------------

/// Owns the tokenizer and service client for the lifetime of the process.
///
/// ```rust,no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use speech_numbers::config::AppConfig;
/// use speech_numbers::extract::WordTokenizer;
/// use speech_numbers::llm::{ApiClient, PromptBuilder};
/// use speech_numbers::rewrite::SpeechRewriter;
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let rewriter = SpeechRewriter::new(
///     Arc::new(WordTokenizer::new()),
///     Arc::new(ApiClient::from_config(&config.llm)),
///     PromptBuilder::from_config(&config.llm),
/// );
/// let spoken = rewriter
///     .rewrite("I bought 3 items.", 3, Path::new("answer.txt"))
///     .await
///     .unwrap();
/// # }
/// ```
pub struct SpeechRewriter {
    tokenizer: Arc<dyn Tokenizer>,
    model: Arc<dyn ChatModel>,
    prompts: PromptBuilder,
}

impl SpeechRewriter {
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        model: Arc<dyn ChatModel>,
        prompts: PromptBuilder,
    ) -> Self {
        Self {
            tokenizer,
            model,
            prompts,
        }
    }

    /// Rewrite `text` with every number in spoken form.
    ///
    /// Returns `Ok(None)` when the text has no numbers and when the answer
    /// log could not be written.  Numbers whose phrasing failed are left to
    /// the final rewrite.  The caller owns persisting the returned text.
    pub async fn rewrite(
        &self,
        text: &str,
        window_radius: usize,
        answer_log: &Path,
    ) -> Result<Option<String>, RewriteError> {
        let contexts = extract(self.tokenizer.as_ref(), text, window_radius)?;
        if contexts.is_empty() {
            log::info!("rewrite: no numbers found, nothing to do");
            return Ok(None);
        }

        let Some(answers) = self.phrase_numbers(&contexts, answer_log).await? else {
            return Ok(None);
        };
        if answers.is_empty() {
            log::warn!(
                "rewrite: none of {} numbers could be phrased, rewriting from the text alone",
                contexts.len()
            );
        }

        let records: Vec<String> = answers.iter().map(ToString::to_string).collect();
        let request = self.prompts.rewrite_request(text, &records);
        log::info!("rewrite: requesting full rewrite ({} answers)", records.len());
        log::debug!("rewrite prompt:\n{}", request.user);

        let rewritten = self.model.complete(&request).await?;
        Ok(Some(rewritten))
    }

    /// Stage A: ask for a spoken phrase for each number, in order, and
    /// append every answer to `answer_log`.
    ///
    /// A failed request is logged and skipped unless it is fatal (missing or
    /// rejected credential), which aborts the batch.  Returns `Ok(None)` if
    /// the log cannot be opened, written or flushed.
    pub async fn phrase_numbers(
        &self,
        contexts: &[NumericContext],
        answer_log: &Path,
    ) -> Result<Option<Vec<SpeechAnswer>>, RewriteError> {
        let mut log_file = match AnswerLog::open(answer_log) {
            Ok(file) => file,
            Err(e) => {
                log::error!("cannot open answer log {}: {e}", answer_log.display());
                return Ok(None);
            }
        };

        log::info!("phrasing {} numbers", contexts.len());
        let mut answers = Vec::with_capacity(contexts.len());

        for source in contexts {
            let request = self.prompts.phrase_request(&source.number, &source.context);
            let phrase = match self.model.complete(&request).await {
                Ok(phrase) => phrase,
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    log::warn!("phrasing {:?} failed, skipping: {e}", source.number);
                    continue;
                }
            };

            let answer = SpeechAnswer::new(source, &phrase);
            log::debug!("{answer}");
            if let Err(e) = log_file.append(&answer) {
                log::error!("cannot write answer log {}: {e}", log_file.path().display());
                return Ok(None);
            }
            answers.push(answer);
        }

        match log_file.finish() {
            Ok(written) => {
                log::info!("saved {written} answers to {}", answer_log.display());
                Ok(Some(answers))
            }
            Err(e) => {
                log::error!("cannot flush answer log {}: {e}", answer_log.display());
                Ok(None)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
