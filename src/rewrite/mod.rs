//! Number-to-speech rewriting.
//!
//! * [`SpeechRewriter`] — runs per-number phrasing, then the whole-text
//!   rewrite.
//! * [`SpeechAnswer`] / [`AnswerLog`] — the per-number records and the
//!   append-only file they are written to.
//! * [`RewriteError`] — failures that abort a run.

pub mod answer;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use answer::{AnswerLog, SpeechAnswer};
pub use runner::{RewriteError, SpeechRewriter};
