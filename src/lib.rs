//! Render the numbers in a passage as speech-ready phrases.
//!
//! The pipeline tokenizes the text, pairs every number-like token with the
//! words around it, asks a chat-completion service how each number should be
//! read aloud, and finally asks the service to rewrite the whole passage
//! with those spoken forms in place.

pub mod config;
pub mod extract;
pub mod llm;
pub mod rewrite;
