//! Numeric-context extraction.
//!
//! * [`Tokenizer`] — trait implemented by tokenizer backends.
//! * [`WordTokenizer`] — default Unicode word-boundary tokenizer.
//! * [`extract`] — pairs every number-like token with its surrounding text.

pub mod context;
pub mod tokenizer;

pub use context::{extract, ExtractError, NumericContext};
pub use tokenizer::{is_number_like, Token, TokenizeError, Tokenizer, WordTokenizer};
