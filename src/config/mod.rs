//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the LLM client,
//! extraction and output files, `AppPaths` for the platform settings file,
//! and TOML loading via `AppConfig::load` / `AppConfig::load_from`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ExtractConfig, LlmConfig, OutputConfig};
