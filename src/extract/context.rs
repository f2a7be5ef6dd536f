//! Numeric-context extraction.
//!
//! For every number-like token, [`extract`] collects the surrounding tokens
//! in the half-open window `[i - radius, i + radius)`, clipped at both ends
//! of the document, and joins their surface text with single spaces.

use thiserror::Error;

use crate::extract::tokenizer::{TokenizeError, Tokenizer};

// ---------------------------------------------------------------------------
// ExtractError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExtractError {
    /// A zero radius would produce a window that excludes the number itself.
    #[error("window radius must be at least 1 (got {0})")]
    InvalidWindow(usize),

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

// ---------------------------------------------------------------------------
// NumericContext
// ---------------------------------------------------------------------------

/// A number-like token paired with the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericContext {
    /// Surface text of the number-like token.
    pub number: String,
    /// Space-joined surface text of the window, number included.
    pub context: String,
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

/// Tokenize `text` and return one [`NumericContext`] per number-like token,
/// in document order.
///
/// # Example
/// ```rust
/// use speech_numbers::extract::{extract, WordTokenizer};
///
/// let found = extract(&WordTokenizer::new(), "I bought 3 items today", 2).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].number, "3");
/// assert_eq!(found[0].context, "I bought 3 items");
/// ```
pub fn extract(
    tokenizer: &dyn Tokenizer,
    text: &str,
    window_radius: usize,
) -> Result<Vec<NumericContext>, ExtractError> {
    if window_radius == 0 {
        return Err(ExtractError::InvalidWindow(window_radius));
    }

    let tokens = tokenizer.tokenize(text)?;

    let contexts: Vec<NumericContext> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.like_num)
        .map(|(i, token)| {
            let start = i.saturating_sub(window_radius);
            let end = (i + window_radius).min(tokens.len());
            let context = tokens[start..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            NumericContext {
                number: token.text.clone(),
                context,
            }
        })
        .collect();

    log::debug!(
        "extract: {} tokens, {} numeric (radius {})",
        tokens.len(),
        contexts.len(),
        window_radius
    );

    Ok(contexts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::tokenizer::{Token, WordTokenizer};

    const SAMPLE: &str = "The price is $100, and I bought 3 items on 2024-05-08.";

    /// Splits on whitespace and marks tokens from a fixed list as numeric.
    struct ListTokenizer(&'static [&'static str]);

    impl Tokenizer for ListTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
            Ok(text
                .split_whitespace()
                .enumerate()
                .map(|(position, word)| Token {
                    text: word.to_string(),
                    position,
                    offset: 0,
                    like_num: self.0.contains(&word),
                })
                .collect())
        }
    }

    struct BrokenTokenizer;

    impl Tokenizer for BrokenTokenizer {
        fn tokenize(&self, _text: &str) -> Result<Vec<Token>, TokenizeError> {
            Err(TokenizeError::Unavailable("model not loaded".into()))
        }
    }

    #[test]
    fn sample_sentence_yields_three_numbers_in_order() {
        let found = extract(&WordTokenizer::new(), SAMPLE, 3).unwrap();

        let numbers: Vec<&str> = found.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, ["100", "3", "2024-05-08"]);

        assert_eq!(found[0].context, "price is $ 100 , and");
        assert_eq!(found[1].context, "and I bought 3 items on");
        assert_eq!(found[2].context, "3 items on 2024-05-08 .");
    }

    #[test]
    fn interior_contexts_hold_at_most_two_radius_tokens() {
        let found = extract(&WordTokenizer::new(), SAMPLE, 3).unwrap();
        for c in &found {
            assert!(c.context.split(' ').count() <= 6, "{:?}", c.context);
            assert!(c.context.split(' ').any(|w| w == c.number));
        }
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract(&WordTokenizer::new(), "", 3).unwrap().is_empty());
    }

    #[test]
    fn text_without_numbers_yields_nothing() {
        let found = extract(&WordTokenizer::new(), "No digits here, only three words.", 3).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn window_is_clipped_at_document_start() {
        let found = extract(&ListTokenizer(&["1"]), "1 a b c d e", 3).unwrap();
        assert_eq!(found[0].context, "1 a b");
    }

    #[test]
    fn window_is_clipped_at_document_end() {
        let found = extract(&ListTokenizer(&["9"]), "a b c d e 9", 3).unwrap();
        assert_eq!(found[0].context, "c d e 9");
    }

    #[test]
    fn single_token_document() {
        let found = extract(&ListTokenizer(&["42"]), "42", 5).unwrap();
        assert_eq!(found, vec![NumericContext {
            number: "42".into(),
            context: "42".into(),
        }]);
    }

    #[test]
    fn wider_radius_widens_the_window() {
        let text = "a b c d e 7 f g h i j";
        let narrow = extract(&ListTokenizer(&["7"]), text, 3).unwrap();
        let wide = extract(&ListTokenizer(&["7"]), text, 5).unwrap();

        assert_eq!(narrow[0].context, "c d e 7 f g");
        assert_eq!(wide[0].context, "a b c d e 7 f g h i");
    }

    #[test]
    fn count_matches_tokenizer_classification() {
        let text = "x 1 y 2 z 3 w";
        let tokenizer = ListTokenizer(&["1", "2", "3"]);
        let numeric = tokenizer
            .tokenize(text)
            .unwrap()
            .iter()
            .filter(|t| t.like_num)
            .count();

        let found = extract(&tokenizer, text, 1).unwrap();
        assert_eq!(found.len(), numeric);
        assert_eq!(found[0].context, "x 1");
        assert_eq!(found[2].context, "z 3");
    }

    #[test]
    fn extraction_is_idempotent() {
        let tokenizer = WordTokenizer::new();
        let first = extract(&tokenizer, SAMPLE, 3).unwrap();
        let second = extract(&tokenizer, SAMPLE, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let err = extract(&WordTokenizer::new(), SAMPLE, 0).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidWindow(0)));
    }

    #[test]
    fn tokenizer_failure_propagates() {
        let err = extract(&BrokenTokenizer, SAMPLE, 3).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Tokenize(TokenizeError::Unavailable(_))
        ));
    }
}
