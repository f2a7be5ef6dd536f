//! Text-generation service access.
//!
//! This module provides:
//! * [`ChatModel`] — async trait implemented by all service backends.
//! * [`ApiClient`] — OpenAI-compatible REST client (Groq by default).
//! * [`ChatRequest`] — role-tagged prompt plus sampling parameters.
//! * [`PromptBuilder`] — builds the phrase and rewrite prompts.
//! * [`LlmError`] — error variants for service calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use speech_numbers::config::AppConfig;
//! use speech_numbers::llm::{ApiClient, ChatModel, PromptBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let client = ApiClient::from_config(&config.llm);
//!     let prompts = PromptBuilder::from_config(&config.llm);
//!
//!     let request = prompts.phrase_request("100", "The price is $ 100 , and");
//!     let phrase = client.complete(&request).await.unwrap();
//!     println!("{phrase}");
//! }
//! ```

pub mod client;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiClient, ChatModel, ChatRequest, LlmError};
pub use prompt::PromptBuilder;
