//! Tokenizer trait and the default Unicode word-boundary tokenizer.
//!
//! [`WordTokenizer`] segments text on UAX #29 word boundaries, so `$100,`
//! becomes `$`, `100`, `,` while `3.5`, `1,000`, `10.05.2025` and `30C`
//! stay whole.  Digit groups glued together by `-` or `/` (`2024-05-08`,
//! `3/4`) are merged back into a single token afterwards.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

// ---------------------------------------------------------------------------
// TokenizeError
// ---------------------------------------------------------------------------

/// Errors a tokenizer backend can report.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The backend (model, dictionary, external process) is not available.
    #[error("tokenizer unavailable: {0}")]
    Unavailable(String),

    /// The input could not be processed by this backend.
    #[error("unsupported input: {0}")]
    Unsupported(String),
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A single token of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text exactly as it appears in the input.
    pub text: String,
    /// Zero-based index of the token within the document.
    pub position: usize,
    /// Byte offset of the token's first character in the input.
    pub offset: usize,
    /// Whether the token looks like a number (digits, decimals, dates,
    /// quantities with units such as `30C`).
    pub like_num: bool,
}

// ---------------------------------------------------------------------------
// Tokenizer trait
// ---------------------------------------------------------------------------

/// Splits raw text into [`Token`]s and classifies number-like tokens.
///
/// Implementors must be `Send + Sync` so a single instance can be shared
/// for the lifetime of the process.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}

// ---------------------------------------------------------------------------
// WordTokenizer
// ---------------------------------------------------------------------------

/// Default tokenizer built on Unicode word boundaries.
///
/// # Example
/// ```rust
/// use speech_numbers::extract::{Tokenizer, WordTokenizer};
///
/// let tokens = WordTokenizer::new().tokenize("Paid $100 on 2024-05-08.").unwrap();
/// let numbers: Vec<&str> = tokens
///     .iter()
///     .filter(|t| t.like_num)
///     .map(|t| t.text.as_str())
///     .collect();
/// assert_eq!(numbers, ["100", "2024-05-08"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let pieces: Vec<(usize, &str)> = text
            .split_word_bound_indices()
            .filter(|(_, s)| !s.chars().all(char::is_whitespace))
            .collect();

        let mut tokens = Vec::with_capacity(pieces.len());
        let mut i = 0;
        while i < pieces.len() {
            let (start, first) = pieces[i];
            let mut end = start + first.len();
            i += 1;

            // Merge `digits [-/] digits` runs with no whitespace in between.
            while i + 1 < pieces.len() {
                let (sep_at, sep) = pieces[i];
                let (next_at, next) = pieces[i + 1];
                let glued = sep_at == end && next_at == sep_at + sep.len();
                let joins_digits = matches!(sep, "-" | "/")
                    && text[start..end].ends_with(|c: char| c.is_ascii_digit())
                    && next.starts_with(|c: char| c.is_ascii_digit());
                if !(glued && joins_digits) {
                    break;
                }
                end = next_at + next.len();
                i += 2;
            }

            let surface = &text[start..end];
            let token = Token {
                text: surface.to_string(),
                position: tokens.len(),
                offset: start,
                like_num: is_number_like(surface),
            };
            log::trace!(
                "token #{} @{} {:?} like_num={}",
                token.position,
                token.offset,
                token.text,
                token.like_num
            );
            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Number-like: an optional leading sign, then an ASCII digit, then only
/// alphanumerics and the separators `. , : / -`.
///
/// Spelled-out numbers ("three") are deliberately not matched; they are
/// already in spoken form.
pub fn is_number_like(s: &str) -> bool {
    let body = s.trim_start_matches(&['+', '-', '±', '~'][..]);
    body.starts_with(|c: char| c.is_ascii_digit())
        && body
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | ',' | ':' | '/' | '-'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
